//! Annotation tags
//!
//! An annotation is `<type-name>:<payload>`. The `unit:`, `math:angle:` and
//! `currency:` type-names have payload grammars and are validated here;
//! every other type-name (`input:`, `address:`, `time:`, `schema:`, or a
//! DNS-qualified custom name) is carried uninterpreted.

#![forbid(unsafe_code)]

mod error;

pub use error::{Error, Result};

use annotated_currency::{ActiveCodes, CurrencyCode};
use annotated_units::{canonicalize, CanonicalUnit, ParseOptions, UnitExpr};
use std::fmt;

pub const UNIT_PREFIX: &str = "unit:";
pub const ANGLE_PREFIX: &str = "math:angle:";
pub const CURRENCY_PREFIX: &str = "currency:";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Annotation {
    Unit { expr: UnitExpr },
    Angle { expr: UnitExpr },
    Currency { code: CurrencyCode },
    Opaque { namespace: String, value: String },
}

impl Annotation {
    pub fn parse(tag: &str) -> Result<Self> {
        Self::parse_with(tag, &ParseOptions::default())
    }

    /// Split off the type-name and validate the payload's shape.
    ///
    /// Currency activity is not checked here; see [`Annotation::validate_with`].
    pub fn parse_with(tag: &str, options: &ParseOptions) -> Result<Self> {
        if let Some(payload) = tag.strip_prefix(UNIT_PREFIX) {
            let expr = parse_unit(payload, UNIT_PREFIX.len(), options)?;
            return Ok(Annotation::Unit { expr });
        }

        if let Some(payload) = tag.strip_prefix(ANGLE_PREFIX) {
            let expr = parse_unit(payload, ANGLE_PREFIX.len(), options)?;
            let dims = canonicalize(&expr).dims;
            if dims.is_empty() || !dims.iter().all(|(symbol, _)| symbol.is_angle()) {
                return Err(Error::AngleNotDimensionless {
                    unit: payload.to_string(),
                });
            }
            return Ok(Annotation::Angle { expr });
        }

        if let Some(payload) = tag.strip_prefix(CURRENCY_PREFIX) {
            let code = CurrencyCode::parse(payload)?;
            return Ok(Annotation::Currency { code });
        }

        match tag.split_once(':') {
            Some((namespace, _)) if namespace.is_empty() => {
                Err(Error::MissingNamespace(tag.to_string()))
            }
            Some((namespace, "")) => Err(Error::EmptyPayload {
                namespace: namespace.to_string(),
            }),
            Some((namespace, value)) => Ok(Annotation::Opaque {
                namespace: namespace.to_string(),
                value: value.to_string(),
            }),
            None => Err(Error::MissingNamespace(tag.to_string())),
        }
    }

    /// Checks that need external data: currency codes must be active.
    pub fn validate_with<A: ActiveCodes + ?Sized>(&self, active: &A) -> Result<()> {
        match self {
            Annotation::Currency { code } => Ok(code.ensure_active(active)?),
            _ => Ok(()),
        }
    }

    pub fn namespace(&self) -> &str {
        match self {
            Annotation::Unit { .. } => "unit",
            Annotation::Angle { .. } => "math:angle",
            Annotation::Currency { .. } => "currency",
            Annotation::Opaque { namespace, .. } => namespace,
        }
    }

    /// Canonical unit for `unit:` and `math:angle:` annotations.
    pub fn canonical_unit(&self) -> Option<CanonicalUnit> {
        match self {
            Annotation::Unit { expr } | Annotation::Angle { expr } => Some(canonicalize(expr)),
            _ => None,
        }
    }
}

fn parse_unit(payload: &str, offset: usize, options: &ParseOptions) -> Result<UnitExpr> {
    annotated_units::parse_with(payload, options).map_err(|source| Error::Unit { offset, source })
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Unit { expr } => write!(f, "{}{}", UNIT_PREFIX, expr),
            Annotation::Angle { expr } => write!(f, "{}{}", ANGLE_PREFIX, expr),
            Annotation::Currency { code } => write!(f, "{}{}", CURRENCY_PREFIX, code),
            Annotation::Opaque { namespace, value } => write!(f, "{}:{}", namespace, value),
        }
    }
}

/// Parse `tag` and run every check, including currency activity.
pub fn check<A: ActiveCodes + ?Sized>(
    tag: &str,
    options: &ParseOptions,
    active: &A,
) -> Result<Annotation> {
    let annotation = Annotation::parse_with(tag, options)?;
    annotation.validate_with(active)?;
    tracing::trace!(namespace = annotation.namespace(), "annotation accepted");
    Ok(annotation)
}
