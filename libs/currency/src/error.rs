//! Currency code errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Not three uppercase Latin letters.
    #[error("currency code '{code}' must be exactly three uppercase letters A-Z")]
    Shape { code: String },

    /// Well-formed, but not in the active ISO 4217 set.
    #[error("currency code '{code}' is not an active ISO 4217 code")]
    UnknownCode { code: String },
}

impl Error {
    pub fn code(&self) -> &str {
        match self {
            Error::Shape { code } | Error::UnknownCode { code } => code,
        }
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, Error::Shape { .. })
    }

    pub fn is_unknown_code(&self) -> bool {
        matches!(self, Error::UnknownCode { .. })
    }
}
