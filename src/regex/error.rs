use thiserror::Error;

/// Every way a pattern can fail to parse. Positions are token indexes,
/// which are also character indexes into the pattern.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unclosed group opened at position {position}")]
    UnclosedGroup { position: usize },
    #[error("unclosed character class opened at position {position}")]
    UnclosedClass { position: usize },
    #[error("empty expression at position {position}")]
    EmptyConcatenation { position: usize },
    #[error("cannot escape '{found}' at position {position}")]
    InvalidEscape { position: usize, found: char },
    #[error("range '{start}-{end}' at position {position} is out of order")]
    RangeOutOfOrder {
        position: usize,
        start: char,
        end: char,
    },
    #[error("unexpected end of pattern at position {position}, expected {expected}")]
    UnexpectedEnd {
        position: usize,
        expected: &'static str,
    },
    #[error("'-' at position {position} has no range end")]
    MissingRangeEnd { position: usize },
    #[error("unexpected '{found}' at position {position}")]
    UnexpectedToken { position: usize, found: char },
    #[error("'{found}' at position {position} must be escaped inside a character class")]
    UnescapedInClass { position: usize, found: char },
    #[error("repetition '{found}' at position {position} follows another repetition")]
    DuplicateModifier { position: usize, found: char },
    #[error("unexpected trailing '{found}' at position {position}")]
    TrailingTokens { position: usize, found: char },
    #[error("groups nested deeper than {limit} at position {position}")]
    NestingTooDeep { position: usize, limit: usize },
}

impl SyntaxError {
    pub fn position(&self) -> usize {
        match *self {
            SyntaxError::UnclosedGroup { position }
            | SyntaxError::UnclosedClass { position }
            | SyntaxError::EmptyConcatenation { position }
            | SyntaxError::InvalidEscape { position, .. }
            | SyntaxError::RangeOutOfOrder { position, .. }
            | SyntaxError::UnexpectedEnd { position, .. }
            | SyntaxError::MissingRangeEnd { position }
            | SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::UnescapedInClass { position, .. }
            | SyntaxError::DuplicateModifier { position, .. }
            | SyntaxError::TrailingTokens { position, .. }
            | SyntaxError::NestingTooDeep { position, .. } => position,
        }
    }
}
