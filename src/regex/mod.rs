pub mod ast;
pub mod classes;
pub mod error;
pub mod parser;
pub mod symbol;
pub mod token;

pub use ast::Ast;
pub use error::SyntaxError;
pub use parser::{DEFAULT_MAX_DEPTH, Parser, ParserConfig};
pub use symbol::{CharSet, Symbol};
pub use token::{Token, TokenKind, tokenize};

pub fn parse_regex(pattern: &str) -> Result<Ast, SyntaxError> {
    parse_regex_with(pattern, ParserConfig::default())
}

pub fn parse_regex_with(pattern: &str, config: ParserConfig) -> Result<Ast, SyntaxError> {
    let tokens = tokenize(pattern);
    Parser::with_config(&tokens, config).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_straight_from_text() {
        assert_eq!(
            parse_regex("ab*"),
            Ok(Ast::concat(vec![Ast::literal('a'), Ast::star(Ast::literal('b'))]))
        );
    }

    #[test]
    fn reports_digit_class() {
        let symbol = match parse_regex(r"\d") {
            Ok(Ast::Match(symbol)) => symbol,
            other => panic!("expected a matcher, got {other:?}"),
        };
        assert!(symbol.matches('7'));
        assert!(!symbol.matches('x'));
    }

    #[test]
    fn parses_are_independent() {
        assert!(parse_regex("(").is_err());
        assert_eq!(parse_regex("()"), Ok(Ast::group(Ast::Empty)));
    }

    #[test]
    fn config_reaches_the_parser() {
        let config = ParserConfig { max_depth: 0 };
        assert_eq!(
            parse_regex_with("(a)", config),
            Err(SyntaxError::NestingTooDeep {
                position: 0,
                limit: 0
            })
        );
    }
}
