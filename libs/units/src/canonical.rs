//! Canonical form of unit expressions
//!
//! The tree is flattened into a multiset of `(prefix, symbol)` factors with
//! net exponents. From that multiset come the canonical text, the
//! [`DimensionVector`] (prefixes factored out) and the aggregate [`Scale`].
//! Two expressions are equivalent when their dimension vectors and scales
//! are equal, regardless of how the source grouped or ordered factors.

use crate::ast::UnitExpr;
use crate::error::Result;
use crate::symbols::{self, UnitLiteral, UnitSymbol};
use std::collections::BTreeMap;
use std::fmt;

/// Exponents over the SI base quantities `(s, m, kg, A, K, mol, cd)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiDimensions(pub [i64; 7]);

impl SiDimensions {
    pub const ZERO: SiDimensions = SiDimensions([0; 7]);

    fn add_scaled(&mut self, other: SiDimensions, times: i64) {
        for (acc, d) in self.0.iter_mut().zip(other.0) {
            *acc = acc.saturating_add(d.saturating_mul(times));
        }
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for SiDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [&str; 7] = ["s", "m", "kg", "A", "K", "mol", "cd"];
        let mut first = true;
        for (name, exp) in NAMES.iter().zip(self.0) {
            if exp == 0 {
                continue;
            }
            if !first {
                write!(f, "{}", symbols::PRODUCT_OPERATOR)?;
            }
            first = false;
            f.write_str(name)?;
            symbols::write_exponent(f, exp)?;
        }
        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}

/// Net exponent per unit symbol, prefixes factored out. Zero entries are
/// never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DimensionVector(BTreeMap<UnitSymbol, i64>);

impl DimensionVector {
    fn add(&mut self, symbol: UnitSymbol, exponent: i64) {
        let entry = self.0.entry(symbol).or_insert(0);
        *entry = entry.saturating_add(exponent);
        if *entry == 0 {
            self.0.remove(&symbol);
        }
    }

    pub fn get(&self, symbol: UnitSymbol) -> i64 {
        self.0.get(&symbol).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (UnitSymbol, i64)> + '_ {
        self.0.iter().map(|(s, e)| (*s, *e))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn si_dimensions(&self) -> SiDimensions {
        let mut dims = SiDimensions::ZERO;
        for (symbol, exp) in self.iter() {
            dims.add_scaled(symbol.si_dimensions(), exp);
        }
        dims
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DimensionVector {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (symbol, exp) in &self.0 {
            map.serialize_entry(symbol.symbol(), exp)?;
        }
        map.end()
    }
}

/// Aggregate prefix scale: `10^pow10 * 2^pow2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scale {
    pub pow10: i64,
    pub pow2: i64,
}

impl Scale {
    pub const ONE: Scale = Scale { pow10: 0, pow2: 0 };
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.pow10, self.pow2) {
            (0, 0) => f.write_str("1"),
            (p10, 0) => {
                f.write_str("10")?;
                symbols::write_exponent(f, p10)
            }
            (0, p2) => {
                f.write_str("2")?;
                symbols::write_exponent(f, p2)
            }
            (p10, p2) => {
                f.write_str("10")?;
                symbols::write_exponent(f, p10)?;
                write!(f, "{}2", symbols::PRODUCT_OPERATOR)?;
                symbols::write_exponent(f, p2)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CanonicalFactor {
    pub literal: UnitLiteral,
    pub exponent: i64,
}

impl fmt::Display for CanonicalFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)?;
        symbols::write_exponent(f, self.exponent)
    }
}

/// Normalized representation of a unit expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CanonicalUnit {
    /// Factors joined by `⋅`, ordered by symbol then prefix spelling,
    /// negative exponents written inline with `⁻`. Empty when dimensionless.
    pub text: String,
    pub factors: Vec<CanonicalFactor>,
    pub dims: DimensionVector,
    pub scale: Scale,
}

impl CanonicalUnit {
    /// Same dimension vector and same aggregate scale.
    pub fn is_equivalent(&self, other: &CanonicalUnit) -> bool {
        self.dims == other.dims && self.scale == other.scale
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dims.is_empty()
    }

    pub fn si_dimensions(&self) -> SiDimensions {
        self.dims.si_dimensions()
    }
}

impl fmt::Display for CanonicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Largest exponent magnitude the lexer accepts.
const MAX_WRITTEN_EXPONENT: u64 = i32::MAX as u64;

/// Net exponent per literal.
struct Flattened {
    net: BTreeMap<UnitLiteral, i64>,
    /// False when an intermediate product saturated or a net exponent cannot
    /// be written back as a superscript.
    exact: bool,
}

fn checked_or(checked: Option<i64>, saturated: i64, exact: &mut bool) -> i64 {
    checked.unwrap_or_else(|| {
        *exact = false;
        saturated
    })
}

fn flatten(expr: &UnitExpr) -> Flattened {
    let mut net: BTreeMap<UnitLiteral, i64> = BTreeMap::new();
    let mut exact = true;

    // Explicit stack: product chains are left-deep and can be long.
    let mut stack: Vec<(&UnitExpr, i64)> = vec![(expr, 1)];
    while let Some((node, sign)) = stack.pop() {
        match node {
            UnitExpr::Product(l, r) => {
                stack.push((r, sign));
                stack.push((l, sign));
            }
            UnitExpr::Quotient(l, r) => {
                let negated = checked_or(sign.checked_neg(), sign.saturating_neg(), &mut exact);
                stack.push((r, negated));
                stack.push((l, sign));
            }
            UnitExpr::Group { inner, exponent } => {
                let exponent = i64::from(*exponent);
                let sign = checked_or(
                    sign.checked_mul(exponent),
                    sign.saturating_mul(exponent),
                    &mut exact,
                );
                stack.push((inner, sign));
            }
            UnitExpr::Factor { literal, exponent } => {
                let exponent = i64::from(*exponent);
                let term = checked_or(
                    sign.checked_mul(exponent),
                    sign.saturating_mul(exponent),
                    &mut exact,
                );
                let entry = net.entry(*literal).or_insert(0);
                *entry = checked_or(
                    entry.checked_add(term),
                    entry.saturating_add(term),
                    &mut exact,
                );
            }
        }
    }

    exact &= net.values().all(|e| e.unsigned_abs() <= MAX_WRITTEN_EXPONENT);
    Flattened { net, exact }
}

/// Whether every net exponent of `expr` can be written as a superscript.
pub(crate) fn exponents_in_range(expr: &UnitExpr) -> bool {
    flatten(expr).exact
}

/// Flatten `expr` into its canonical form. Never fails.
///
/// Trees from [`crate::parse`] always have writable net exponents, so their
/// canonical text parses back. Hand-built trees whose exponents overflow are
/// saturated instead.
pub fn canonicalize(expr: &UnitExpr) -> CanonicalUnit {
    let net = flatten(expr).net;

    let mut factors: Vec<CanonicalFactor> = net
        .into_iter()
        .filter(|(_, exponent)| *exponent != 0)
        .map(|(literal, exponent)| CanonicalFactor { literal, exponent })
        .collect();
    factors.sort_by_key(|f| (f.literal.unit_symbol().symbol(), f.literal.prefix_symbol()));

    let mut dims = DimensionVector::default();
    let mut scale = Scale::ONE;
    let mut text = String::new();
    for factor in &factors {
        dims.add(factor.literal.unit_symbol(), factor.exponent);
        scale.pow10 = scale
            .pow10
            .saturating_add(factor.literal.power_of_ten().saturating_mul(factor.exponent));
        scale.pow2 = scale
            .pow2
            .saturating_add(factor.literal.power_of_two().saturating_mul(factor.exponent));
        if !text.is_empty() {
            text.push(symbols::PRODUCT_OPERATOR);
        }
        text.push_str(&factor.to_string());
    }

    tracing::trace!(canonical = %text, %scale, "canonicalized unit expression");

    CanonicalUnit {
        text,
        factors,
        dims,
        scale,
    }
}

/// Parse and canonicalize in one step.
pub fn canonicalize_str(input: &str) -> Result<CanonicalUnit> {
    crate::parse(input).map(|expr| canonicalize(&expr))
}

/// Whether two unit payloads denote the same unit.
pub fn equivalent(lhs: &str, rhs: &str) -> Result<bool> {
    Ok(canonicalize_str(lhs)?.is_equivalent(&canonicalize_str(rhs)?))
}
