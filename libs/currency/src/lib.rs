//! Currency codes for `currency:` annotations
//!
//! A code is checked in two steps: its shape (three uppercase letters A-Z)
//! and its presence in a caller-supplied set of active ISO 4217 codes. The
//! set is not embedded because it changes over time; callers pass anything
//! implementing [`ActiveCodes`].

#![forbid(unsafe_code)]

mod error;

pub use error::{Error, Result};

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::BuildHasher;
use std::str::FromStr;

static CODE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}$").expect("currency code pattern is valid"));

/// Source of the currently active ISO 4217 alphabetic codes.
pub trait ActiveCodes {
    fn is_active(&self, code: &str) -> bool;
}

impl<T: ActiveCodes + ?Sized> ActiveCodes for &T {
    fn is_active(&self, code: &str) -> bool {
        (**self).is_active(code)
    }
}

impl<S: BuildHasher> ActiveCodes for HashSet<String, S> {
    fn is_active(&self, code: &str) -> bool {
        self.contains(code)
    }
}

impl<S: BuildHasher> ActiveCodes for HashSet<&str, S> {
    fn is_active(&self, code: &str) -> bool {
        self.contains(code)
    }
}

impl ActiveCodes for BTreeSet<String> {
    fn is_active(&self, code: &str) -> bool {
        self.contains(code)
    }
}

impl ActiveCodes for BTreeSet<&str> {
    fn is_active(&self, code: &str) -> bool {
        self.contains(code)
    }
}

impl ActiveCodes for [&str] {
    fn is_active(&self, code: &str) -> bool {
        self.contains(&code)
    }
}

impl<const N: usize> ActiveCodes for [&str; N] {
    fn is_active(&self, code: &str) -> bool {
        self.contains(&code)
    }
}

/// An owned set of active codes, e.g. loaded from a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CurrencyRegistry {
    codes: HashSet<String>,
}

impl CurrencyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>) -> bool {
        self.codes.insert(code.into())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl ActiveCodes for CurrencyRegistry {
    fn is_active(&self, code: &str) -> bool {
        self.codes.contains(code)
    }
}

impl<T: Into<String>> FromIterator<T> for CurrencyRegistry {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A code with a valid shape. Says nothing about whether it is active.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(code: &str) -> Result<Self> {
        if CODE_SHAPE.is_match(code) {
            Ok(CurrencyCode(code.to_string()))
        } else {
            Err(Error::Shape {
                code: code.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn ensure_active<A: ActiveCodes + ?Sized>(&self, active: &A) -> Result<()> {
        if active.is_active(&self.0) {
            Ok(())
        } else {
            Err(Error::UnknownCode {
                code: self.0.clone(),
            })
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check shape first, then membership in `active`.
pub fn validate_currency<A: ActiveCodes + ?Sized>(code: &str, active: &A) -> Result<()> {
    let result = CurrencyCode::parse(code).and_then(|c| c.ensure_active(active));
    if let Err(err) = &result {
        tracing::debug!(code, error = %err, "rejected currency code");
    }
    result
}
