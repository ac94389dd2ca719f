//! Token types for the unit expression lexer

use crate::symbols::UnitLiteral;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A resolved prefix + symbol.
    Literal(UnitLiteral),
    /// A run of superscript digits, optionally negated.
    Exponent(i32),
    Product,    // ⋅
    Quotient,   // /
    OpenParen,  // (
    CloseParen, // )
    Eof,
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

impl Token {
    pub fn new(kind: TokenKind, pos: usize) -> Self {
        Self { kind, pos }
    }

    pub fn eof(pos: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            pos,
        }
    }
}
