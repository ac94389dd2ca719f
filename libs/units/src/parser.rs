//! Unit expression parser
//!
//! Recursive descent over the grammar:
//!
//! ```text
//! unit     ::= factor | unit '⋅' factor | unit '/' factor
//! factor   ::= base exponent?
//! base     ::= literal | '(' unit ')'
//! exponent ::= '⁻'? digit_nonzero digit*
//! ```
//!
//! `⋅` and `/` share one precedence level and associate to the left, so
//! `a⋅b/c` is `(a⋅b)/c`. The whole payload must be consumed, and every net
//! exponent must be writable as a superscript so canonical text parses back.

use crate::ast::UnitExpr;
use crate::canonical;
use crate::error::{Error, Result};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// How a second `/` at the same nesting level is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DivisionMode {
    /// `a/b/c` is accepted as `(a/b)/c`.
    #[default]
    LeftAssociative,
    /// `a/b/c` is rejected; the author must write `a/(b⋅c)`.
    Strict,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOptions {
    pub division: DivisionMode,
    /// Maximum parenthesis nesting.
    pub max_depth: usize,
    /// Maximum number of literals in one payload.
    pub max_factors: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 64;
pub const DEFAULT_MAX_FACTORS: usize = 1024;

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            division: DivisionMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_factors: DEFAULT_MAX_FACTORS,
        }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            division: DivisionMode::Strict,
            ..Self::default()
        }
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    options: &'a ParseOptions,
    depth: usize,
    factors: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser positioned on the first token.
    pub fn new(input: &'a str, options: &'a ParseOptions) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            options,
            depth: 0,
            factors: 0,
        })
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Parse the entire payload.
    pub fn parse(&mut self) -> Result<UnitExpr> {
        if self.current.kind == TokenKind::Eof {
            return Err(Error::syntax(self.current.pos, "empty unit expression"));
        }

        let expr = self.parse_unit()?;

        match self.current.kind {
            TokenKind::Eof if !canonical::exponents_in_range(&expr) => {
                Err(Error::syntax(0, "net exponent out of range"))
            }
            TokenKind::Eof => Ok(expr),
            TokenKind::CloseParen => Err(Error::syntax(self.current.pos, "unmatched ')'")),
            TokenKind::Exponent(_) => Err(Error::syntax(self.current.pos, "repeated exponent")),
            _ => Err(Error::syntax(
                self.current.pos,
                "trailing characters after expression",
            )),
        }
    }

    fn parse_unit(&mut self) -> Result<UnitExpr> {
        let mut left = self.parse_factor()?;
        let mut divided = false;

        loop {
            match self.current.kind {
                TokenKind::Product => {
                    self.advance()?;
                    let right = self.parse_factor()?;
                    left = UnitExpr::product(left, right);
                }
                TokenKind::Quotient => {
                    if divided && self.options.division == DivisionMode::Strict {
                        return Err(Error::syntax(
                            self.current.pos,
                            "ambiguous chained division",
                        ));
                    }
                    divided = true;
                    self.advance()?;
                    let right = self.parse_factor()?;
                    left = UnitExpr::quotient(left, right);
                }
                _ => return Ok(left),
            }
        }
    }

    fn parse_factor(&mut self) -> Result<UnitExpr> {
        let token = self.current;
        match token.kind {
            TokenKind::Literal(literal) => {
                self.factors += 1;
                if self.factors > self.options.max_factors {
                    return Err(Error::syntax(token.pos, "too many factors"));
                }
                self.advance()?;
                let exponent = self.parse_exponent()?;
                Ok(UnitExpr::Factor { literal, exponent })
            }
            TokenKind::OpenParen => {
                self.enter_group(token.pos)?;
                self.advance()?;
                if self.current.kind == TokenKind::CloseParen {
                    return Err(Error::syntax(self.current.pos, "empty group"));
                }
                let inner = self.parse_unit()?;
                if self.current.kind != TokenKind::CloseParen {
                    return Err(Error::syntax(token.pos, "unterminated group"));
                }
                self.advance()?;
                self.depth -= 1;
                let exponent = self.parse_exponent()?;
                Ok(UnitExpr::group(inner, exponent))
            }
            TokenKind::Product | TokenKind::Quotient => {
                Err(Error::syntax(token.pos, "missing operand before operator"))
            }
            TokenKind::Eof => Err(Error::syntax(token.pos, "missing operand after operator")),
            TokenKind::CloseParen => Err(Error::syntax(token.pos, "unmatched ')'")),
            TokenKind::Exponent(_) => Err(Error::syntax(token.pos, "exponent without a base")),
        }
    }

    fn enter_group(&mut self, pos: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(Error::syntax(pos, "expression too deeply nested"));
        }
        Ok(())
    }

    /// Optional exponent after a base; absent means 1.
    fn parse_exponent(&mut self) -> Result<i32> {
        match self.current.kind {
            TokenKind::Exponent(exponent) => {
                self.advance()?;
                if let TokenKind::Exponent(_) = self.current.kind {
                    return Err(Error::syntax(self.current.pos, "repeated exponent"));
                }
                Ok(exponent)
            }
            _ => Ok(1),
        }
    }
}

/// Parse a unit payload with default options.
pub fn parse(input: &str) -> Result<UnitExpr> {
    parse_with(input, &ParseOptions::default())
}

pub fn parse_with(input: &str, options: &ParseOptions) -> Result<UnitExpr> {
    let result = Parser::new(input, options).and_then(|mut parser| parser.parse());
    if let Err(err) = &result {
        tracing::debug!(input, pos = err.pos(), error = %err, "rejected unit expression");
    }
    result
}

/// Check a unit payload without keeping the tree.
pub fn validate(input: &str) -> Result<()> {
    parse(input).map(|_| ())
}
