//! Error types for unit expression parsing

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A rejected unit expression.
///
/// Every variant carries `pos`, the byte offset into the payload (the text
/// after `unit:`) where the problem starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The character sequence at `pos` cannot begin or continue a token.
    #[error("invalid unit token at byte {pos}: {kind}")]
    Lex { pos: usize, kind: LexErrorKind },

    /// Tokens are valid but violate the grammar structure.
    #[error("invalid unit syntax at byte {pos}: {message}")]
    Syntax { pos: usize, message: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unknown unit symbol '{0}'")]
    UnknownUnit(String),

    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("operator '{0}' is not allowed, use '⋅' (U+22C5) for multiplication")]
    WrongOperator(char),

    #[error("exponents must be written with superscript digits, found '{0}'")]
    AsciiExponent(char),

    #[error("leading zero exponent digit")]
    LeadingZeroExponent,

    #[error("superscript minus must be followed by an exponent digit")]
    MissingExponentDigits,

    #[error("exponent does not fit in 32 bits")]
    ExponentOverflow,
}

impl Error {
    pub(crate) fn lex(pos: usize, kind: LexErrorKind) -> Self {
        Error::Lex { pos, kind }
    }

    pub(crate) fn syntax(pos: usize, message: &'static str) -> Self {
        Error::Syntax { pos, message }
    }

    /// Byte offset of the offending input.
    pub fn pos(&self) -> usize {
        match self {
            Error::Lex { pos, .. } | Error::Syntax { pos, .. } => *pos,
        }
    }

    pub fn is_lex(&self) -> bool {
        matches!(self, Error::Lex { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. })
    }
}
