use crate::regex::ast::Ast;
use crate::regex::classes;
use crate::regex::error::SyntaxError;
use crate::regex::symbol::{CharSet, Symbol};
use crate::regex::token::{Token, TokenKind};

pub const DEFAULT_MAX_DEPTH: usize = 128;

// Characters that only appear escaped inside `[...]`.
const CLASS_RESERVED: [char; 4] = ['-', '^', ']', '\\'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// How many groups may be open at once before parsing fails.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Cursor<'t> {
    fn position(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    // Only valid right after a successful `next`.
    fn rewind(&mut self) {
        debug_assert!(self.pos > 0);
        self.pos -= 1;
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_char(&mut self, c: char) -> bool {
        if self.peek().is_some_and(|t| t.value == c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}

/// Recursive-descent parser over one token sequence.
///
/// ```text
/// regexp         := alternation | ε
/// alternation    := concatenation ('|' concatenation)*
/// concatenation  := unit+
/// unit           := primary ('*' | '+' | '?')?
/// primary        := CHAR | '.' | group | backslashed | characterClass
/// group          := '(' regexp ')'
/// characterClass := '[' '^'? (classChar ('-' classChar)?)* ']'
/// ```
///
/// `parse` takes the parser by value, so each instance parses once.
pub struct Parser<'t> {
    cursor: Cursor<'t>,
    config: ParserConfig,
    depth: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: &'t [Token], config: ParserConfig) -> Self {
        Parser {
            cursor: Cursor { tokens, pos: 0 },
            config,
            depth: 0,
        }
    }

    pub fn parse(mut self) -> Result<Ast, SyntaxError> {
        let ast = self.regexp()?;
        match self.cursor.peek() {
            Some(token) => Err(SyntaxError::TrailingTokens {
                position: self.cursor.position(),
                found: token.value,
            }),
            None => Ok(ast),
        }
    }

    fn regexp(&mut self) -> Result<Ast, SyntaxError> {
        match self.cursor.peek_kind() {
            None | Some(TokenKind::RightParen) => Ok(Ast::Empty),
            Some(_) => self.alternation(),
        }
    }

    fn alternation(&mut self) -> Result<Ast, SyntaxError> {
        let mut ast = self.concatenation()?;
        while self.cursor.eat(TokenKind::Bar) {
            let rhs = self.concatenation()?;
            ast = Ast::or(ast, rhs);
        }
        Ok(ast)
    }

    fn concatenation(&mut self) -> Result<Ast, SyntaxError> {
        let start = self.cursor.position();
        let mut units = Vec::new();

        while let Some(kind) = self.cursor.peek_kind() {
            if matches!(kind, TokenKind::Bar | TokenKind::RightParen) {
                break;
            }
            units.push(self.unit()?);
        }

        if units.len() > 1 {
            Ok(Ast::concat(units))
        } else {
            units
                .pop()
                .ok_or(SyntaxError::EmptyConcatenation { position: start })
        }
    }

    fn unit(&mut self) -> Result<Ast, SyntaxError> {
        let primary = self.primary()?;

        let Some(token) = self.cursor.next() else {
            return Ok(primary);
        };
        let ast = match token.kind {
            TokenKind::Star => Ast::star(primary),
            TokenKind::Plus => Ast::plus(primary),
            TokenKind::Question => Ast::question(primary),
            _ => {
                self.cursor.rewind();
                return Ok(primary);
            }
        };

        match self.cursor.peek() {
            Some(extra) if extra.kind.is_modifier() => Err(SyntaxError::DuplicateModifier {
                position: self.cursor.position(),
                found: extra.value,
            }),
            _ => Ok(ast),
        }
    }

    fn primary(&mut self) -> Result<Ast, SyntaxError> {
        let position = self.cursor.position();
        let token = self.cursor.next().ok_or(SyntaxError::UnexpectedEnd {
            position,
            expected: "an expression",
        })?;

        match token.kind {
            TokenKind::Char => Ok(Ast::literal(token.value)),
            TokenKind::Dot => Ok(Ast::Match(Symbol::Any)),
            TokenKind::LeftParen => self.group(position),
            TokenKind::Backslash => self.backslashed(position),
            TokenKind::LeftBracket => self.character_class(position),
            _ => Err(SyntaxError::UnexpectedToken {
                position,
                found: token.value,
            }),
        }
    }

    fn group(&mut self, open: usize) -> Result<Ast, SyntaxError> {
        if self.depth >= self.config.max_depth {
            return Err(SyntaxError::NestingTooDeep {
                position: open,
                limit: self.config.max_depth,
            });
        }

        self.depth += 1;
        let inner = self.regexp()?;
        self.depth -= 1;

        if !self.cursor.eat(TokenKind::RightParen) {
            return Err(SyntaxError::UnclosedGroup { position: open });
        }
        Ok(Ast::group(inner))
    }

    fn backslashed(&mut self, backslash: usize) -> Result<Ast, SyntaxError> {
        let token = self.cursor.next().ok_or(SyntaxError::UnexpectedEnd {
            position: backslash + 1,
            expected: "a character after '\\'",
        })?;

        if !token.is_special() && !classes::is_recognized(token.value) {
            return Err(SyntaxError::InvalidEscape {
                position: backslash,
                found: token.value,
            });
        }
        // the table only holds letters, so metacharacters fall through as literals
        match classes::lookup(token.value) {
            Some(symbol) => Ok(Ast::Match(symbol.clone())),
            None => Ok(Ast::literal(token.value)),
        }
    }

    fn character_class(&mut self, open: usize) -> Result<Ast, SyntaxError> {
        let negated = self.cursor.eat_char('^');
        let mut ranges = Vec::new();

        loop {
            match self.cursor.peek_kind() {
                None => return Err(SyntaxError::UnclosedClass { position: open }),
                Some(TokenKind::RightBracket) => {
                    self.cursor.next();
                    break;
                }
                Some(_) => {}
            }

            let position = self.cursor.position();
            let start = self.class_char()?;
            let dash = self.cursor.position();
            if self.cursor.eat_char('-') {
                if self.cursor.peek_kind() == Some(TokenKind::RightBracket) {
                    return Err(SyntaxError::MissingRangeEnd { position: dash });
                }
                let end = self.class_char()?;
                if start > end {
                    return Err(SyntaxError::RangeOutOfOrder {
                        position,
                        start,
                        end,
                    });
                }
                ranges.push((start, end));
            } else {
                ranges.push((start, start));
            }
        }

        let members = CharSet::from_ranges(ranges);
        let symbol = if negated {
            Symbol::NoneOf(members)
        } else {
            Symbol::AnyOf(members)
        };
        Ok(Ast::Match(symbol))
    }

    fn class_char(&mut self) -> Result<char, SyntaxError> {
        let position = self.cursor.position();
        let token = self.cursor.next().ok_or(SyntaxError::UnexpectedEnd {
            position,
            expected: "a class character",
        })?;

        if token.kind == TokenKind::Backslash {
            let escaped = self.cursor.next().ok_or(SyntaxError::UnexpectedEnd {
                position: position + 1,
                expected: "a character after '\\'",
            })?;
            return if CLASS_RESERVED.contains(&escaped.value) {
                Ok(escaped.value)
            } else {
                Err(SyntaxError::InvalidEscape {
                    position,
                    found: escaped.value,
                })
            };
        }

        if CLASS_RESERVED.contains(&token.value) {
            return Err(SyntaxError::UnescapedInClass {
                position,
                found: token.value,
            });
        }
        Ok(token.value)
    }
}
