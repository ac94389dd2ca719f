//! Unit expressions for `unit:` annotations
//!
//! Parses payloads such as `kg⋅m/s²` or `KiB/s` into a [`UnitExpr`] tree and
//! reduces trees to a [`CanonicalUnit`] for display, storage and
//! equivalence checks.
//!
//! ```text
//! payload --Lexer--> tokens --Parser--> UnitExpr --canonicalize--> CanonicalUnit
//! ```
//!
//! No unit conversion is performed. The canonical form exposes prefix scale
//! and SI dimensions so callers can make their own compatibility decisions.

#![forbid(unsafe_code)]

mod ast;
mod canonical;
mod error;
pub mod lexer;
mod parser;
pub mod symbols;
pub mod token;

pub use ast::UnitExpr;
pub use canonical::{
    canonicalize, canonicalize_str, equivalent, CanonicalFactor, CanonicalUnit, DimensionVector,
    Scale, SiDimensions,
};
pub use error::{Error, LexErrorKind, Result};
pub use parser::{
    parse, parse_with, validate, DivisionMode, ParseOptions, Parser, DEFAULT_MAX_DEPTH,
    DEFAULT_MAX_FACTORS,
};
pub use symbols::{
    BinaryPrefix, BinarySymbol, MetricPrefix, MetricSymbol, OtherSymbol, UnitLiteral, UnitSymbol,
};
