//! Errors for whole annotation tags

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("annotation '{0}' has no type-name (expected '<type-name>:<payload>')")]
    MissingNamespace(String),

    #[error("annotation '{namespace}:' has an empty payload")]
    EmptyPayload { namespace: String },

    /// `offset` is where the payload starts inside the whole tag.
    #[error("{source}")]
    Unit {
        offset: usize,
        #[source]
        source: annotated_units::Error,
    },

    #[error("angle unit '{unit}' must be built from rad, sr or τ")]
    AngleNotDimensionless { unit: String },

    #[error(transparent)]
    Currency(#[from] annotated_currency::Error),
}

impl Error {
    /// Byte offset into the whole tag, when the error has one.
    pub fn pos(&self) -> Option<usize> {
        match self {
            Error::Unit { offset, source } => Some(offset + source.pos()),
            _ => None,
        }
    }
}
