use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Char,
    LeftParen,    // (
    RightParen,   // )
    Star,         // *
    Plus,         // +
    Question,     // ?
    Bar,          // |
    Dot,          // .
    Backslash,    // \
    LeftBracket,  // [
    RightBracket, // ]
}

impl TokenKind {
    pub const SPECIAL: [TokenKind; 10] = [
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::Star,
        TokenKind::Plus,
        TokenKind::Question,
        TokenKind::Bar,
        TokenKind::Dot,
        TokenKind::Backslash,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
    ];

    pub fn of(c: char) -> TokenKind {
        match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '*' => TokenKind::Star,
            '+' => TokenKind::Plus,
            '?' => TokenKind::Question,
            '|' => TokenKind::Bar,
            '.' => TokenKind::Dot,
            '\\' => TokenKind::Backslash,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            _ => TokenKind::Char,
        }
    }

    /// The character a special kind is made from, `None` for `Char`.
    pub fn canonical(self) -> Option<char> {
        match self {
            TokenKind::Char => None,
            TokenKind::LeftParen => Some('('),
            TokenKind::RightParen => Some(')'),
            TokenKind::Star => Some('*'),
            TokenKind::Plus => Some('+'),
            TokenKind::Question => Some('?'),
            TokenKind::Bar => Some('|'),
            TokenKind::Dot => Some('.'),
            TokenKind::Backslash => Some('\\'),
            TokenKind::LeftBracket => Some('['),
            TokenKind::RightBracket => Some(']'),
        }
    }

    pub fn is_special(self) -> bool {
        self != TokenKind::Char
    }

    pub fn is_modifier(self) -> bool {
        matches!(self, TokenKind::Star | TokenKind::Plus | TokenKind::Question)
    }

    fn name(self) -> &'static str {
        match self {
            TokenKind::Char => "CHAR",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::Star => "STAR",
            TokenKind::Plus => "PLUS",
            TokenKind::Question => "QUESTION",
            TokenKind::Bar => "BAR",
            TokenKind::Dot => "DOT",
            TokenKind::Backslash => "BACKSLASH",
            TokenKind::LeftBracket => "LBRACKET",
            TokenKind::RightBracket => "RBRACKET",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: char,
}

impl Token {
    pub fn new(value: char) -> Token {
        Token {
            kind: TokenKind::of(value),
            value,
        }
    }

    pub fn is_special(&self) -> bool {
        self.kind.is_special()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Char => write!(f, "CHAR({})", self.value.escape_debug()),
            kind => f.write_str(kind.name()),
        }
    }
}

/// Splits a pattern into one token per character. Never fails.
pub fn tokenize(input: &str) -> Vec<Token> {
    input.chars().map(Token::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_token_per_char_in_order() {
        let input = "a(b|c)*\\é";
        let tokens = tokenize(input);

        assert_eq!(tokens.len(), input.chars().count());
        for (token, c) in tokens.iter().zip(input.chars()) {
            assert_eq!(token.value, c);
        }
    }

    #[test]
    fn exactly_the_ten_metacharacters_are_special() {
        let specials: Vec<char> = (0u32..0x250)
            .filter_map(char::from_u32)
            .filter(|&c| Token::new(c).is_special())
            .collect();

        assert_eq!(specials.len(), 10);
        for kind in TokenKind::SPECIAL {
            let c = kind.canonical().expect("special kinds have a canonical char");
            assert_eq!(TokenKind::of(c), kind);
            assert!(specials.contains(&c));
        }
    }

    #[test]
    fn ordinary_lookalikes_stay_literal() {
        for c in ['^', '-', '$', '{', '}', 'd', ' '] {
            assert_eq!(Token::new(c).kind, TokenKind::Char, "{c:?}");
        }
    }

    #[test]
    fn empty_input_gives_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn displays_kind_names() {
        let shown: Vec<String> = tokenize("a*[").iter().map(|t| t.to_string()).collect();
        assert_eq!(shown, ["CHAR(a)", "STAR", "LBRACKET"]);
    }
}
