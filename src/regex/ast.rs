use std::fmt;

use crate::regex::symbol::Symbol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    Empty,                  // ()
    Concat(Vec<Ast>),       // ab
    Or(Box<Ast>, Box<Ast>), // a|b
    Match(Symbol),
    Star(Box<Ast>),     // *
    Plus(Box<Ast>),     // +
    Question(Box<Ast>), // ?
    Group(Box<Ast>),    // (...), non-capturing
}

impl Ast {
    pub fn literal(c: char) -> Ast {
        Ast::Match(Symbol::Char(c))
    }

    pub fn concat(nodes: Vec<Ast>) -> Ast {
        Ast::Concat(nodes)
    }

    pub fn or(left: Ast, right: Ast) -> Ast {
        Ast::Or(Box::new(left), Box::new(right))
    }

    pub fn star(inner: Ast) -> Ast {
        Ast::Star(Box::new(inner))
    }

    pub fn plus(inner: Ast) -> Ast {
        Ast::Plus(Box::new(inner))
    }

    pub fn question(inner: Ast) -> Ast {
        Ast::Question(Box::new(inner))
    }

    pub fn group(inner: Ast) -> Ast {
        Ast::Group(Box::new(inner))
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Empty => f.write_str("(empty)"),
            Ast::Concat(nodes) => {
                f.write_str("(concat")?;
                for node in nodes {
                    write!(f, " {node}")?;
                }
                f.write_str(")")
            }
            Ast::Or(left, right) => write!(f, "(or {left} {right})"),
            Ast::Match(symbol) => write!(f, "{symbol}"),
            Ast::Star(inner) => write!(f, "(star {inner})"),
            Ast::Plus(inner) => write!(f, "(plus {inner})"),
            Ast::Question(inner) => write!(f, "(question {inner})"),
            Ast::Group(inner) => write!(f, "(group {inner})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_tree() {
        let ast = Ast::or(
            Ast::concat(vec![Ast::literal('a'), Ast::star(Ast::literal('b'))]),
            Ast::group(Ast::Empty),
        );
        assert_eq!(ast.to_string(), "(or (concat 'a' (star 'b')) (group (empty)))");
    }

    #[test]
    fn renders_wildcard_and_repetitions() {
        assert_eq!(Ast::plus(Ast::Match(Symbol::Any)).to_string(), "(plus any)");
        assert_eq!(Ast::question(Ast::literal('x')).to_string(), "(question 'x')");
    }
}
