//! Unit expression tree
//!
//! Operator chains are left-deep and as long as the payload allows, so
//! `Drop` and `Display` walk them with explicit stacks.

use crate::symbols::{self, OtherSymbol, UnitLiteral};
use std::fmt;
use std::mem;

/// Parsed form of a unit expression.
///
/// `Product` and `Quotient` always have two operands; the parser builds them
/// left-deep, so `a⋅b/c` is `Quotient(Product(a, b), c)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitExpr {
    Product(Box<UnitExpr>, Box<UnitExpr>),
    Quotient(Box<UnitExpr>, Box<UnitExpr>),
    /// A literal raised to a nonzero power (1 when no exponent is written).
    Factor { literal: UnitLiteral, exponent: i32 },
    /// A parenthesized expression, kept for round-trip fidelity.
    Group { inner: Box<UnitExpr>, exponent: i32 },
}

impl UnitExpr {
    pub fn literal(literal: UnitLiteral) -> Self {
        UnitExpr::Factor {
            literal,
            exponent: 1,
        }
    }

    pub fn factor(literal: UnitLiteral, exponent: i32) -> Self {
        UnitExpr::Factor { literal, exponent }
    }

    pub fn product(left: UnitExpr, right: UnitExpr) -> Self {
        UnitExpr::Product(Box::new(left), Box::new(right))
    }

    pub fn quotient(left: UnitExpr, right: UnitExpr) -> Self {
        UnitExpr::Quotient(Box::new(left), Box::new(right))
    }

    pub fn group(inner: UnitExpr, exponent: i32) -> Self {
        UnitExpr::Group {
            inner: Box::new(inner),
            exponent,
        }
    }

    /// Move boxed children into `out`, leaving leaves in their place.
    fn take_children(&mut self, out: &mut Vec<Box<UnitExpr>>) {
        let placeholder = || {
            Box::new(UnitExpr::literal(UnitLiteral::Other {
                symbol: OtherSymbol::Turn,
            }))
        };
        match self {
            UnitExpr::Product(l, r) | UnitExpr::Quotient(l, r) => {
                out.push(mem::replace(l, placeholder()));
                out.push(mem::replace(r, placeholder()));
            }
            UnitExpr::Group { inner, .. } => out.push(mem::replace(inner, placeholder())),
            UnitExpr::Factor { .. } => {}
        }
    }

    /// Right operands that are themselves compositions need parentheses to
    /// keep the tree shape when printed.
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitExpr::Product(..) | UnitExpr::Quotient(..) => {
                write!(f, "{}{}{}", symbols::GROUP_OPEN, self, symbols::GROUP_CLOSE)
            }
            _ => write!(f, "{}", self),
        }
    }
}

impl Drop for UnitExpr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut child) = pending.pop() {
            child.take_children(&mut pending);
        }
    }
}

impl fmt::Display for UnitExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Descend the left spine, then print right operands bottom-up.
        let mut spine = Vec::new();
        let mut node = self;
        loop {
            match node {
                UnitExpr::Product(l, r) => {
                    spine.push((symbols::PRODUCT_OPERATOR, r));
                    node = &**l;
                }
                UnitExpr::Quotient(l, r) => {
                    spine.push((symbols::QUOTIENT_OPERATOR, r));
                    node = &**l;
                }
                UnitExpr::Factor { literal, exponent } => {
                    write!(f, "{}", literal)?;
                    symbols::write_exponent(f, i64::from(*exponent))?;
                    break;
                }
                UnitExpr::Group { inner, exponent } => {
                    write!(f, "{}{}{}", symbols::GROUP_OPEN, inner, symbols::GROUP_CLOSE)?;
                    symbols::write_exponent(f, i64::from(*exponent))?;
                    break;
                }
            }
        }

        for (operator, right) in spine.into_iter().rev() {
            write!(f, "{}", operator)?;
            right.fmt_operand(f)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for UnitExpr {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
