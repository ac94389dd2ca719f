//! Unit expression lexer
//!
//! Splits a payload into literals, superscript exponents, operators and
//! parentheses. Literal text is the maximal run of letters; it is resolved
//! against the closed symbol tables before a token is produced, so an
//! unknown symbol is reported here rather than by the parser.

use crate::error::{Error, LexErrorKind, Result};
use crate::symbols::{self, UnitLiteral};
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.position += c.len_utf8();
        }
    }

    /// Produce the next token, or `Eof` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token> {
        let start = self.position;
        let Some(c) = self.current_char() else {
            return Ok(Token::eof(start));
        };

        let kind = match c {
            symbols::PRODUCT_OPERATOR => {
                self.advance();
                TokenKind::Product
            }
            symbols::QUOTIENT_OPERATOR => {
                self.advance();
                TokenKind::Quotient
            }
            symbols::GROUP_OPEN => {
                self.advance();
                TokenKind::OpenParen
            }
            symbols::GROUP_CLOSE => {
                self.advance();
                TokenKind::CloseParen
            }
            c if symbols::is_superscript(c) => TokenKind::Exponent(self.read_exponent()?),
            c if symbols::is_literal_char(c) => TokenKind::Literal(self.read_literal()?),
            c if c.is_ascii_digit() || c == '-' || c == '^' => {
                return Err(Error::lex(start, LexErrorKind::AsciiExponent(c)));
            }
            c if symbols::is_lookalike_product(c) => {
                return Err(Error::lex(start, LexErrorKind::WrongOperator(c)));
            }
            c => return Err(Error::lex(start, LexErrorKind::UnexpectedChar(c))),
        };

        Ok(Token::new(kind, start))
    }

    fn read_literal(&mut self) -> Result<UnitLiteral> {
        let start = self.position;
        while matches!(self.current_char(), Some(c) if symbols::is_literal_char(c)) {
            self.advance();
        }
        let text = &self.input[start..self.position];
        UnitLiteral::resolve(text)
            .ok_or_else(|| Error::lex(start, LexErrorKind::UnknownUnit(text.to_string())))
    }

    /// Read `⁻? digit+` where the first digit is not `⁰`.
    fn read_exponent(&mut self) -> Result<i32> {
        let negative = self.current_char() == Some(symbols::SUPERSCRIPT_MINUS);
        if negative {
            self.advance();
        }

        let digits_start = self.position;
        let mut value: i32 = 0;
        while let Some(digit) = self.current_char().and_then(symbols::superscript_digit) {
            if digit == 0 && self.position == digits_start {
                return Err(Error::lex(
                    digits_start,
                    LexErrorKind::LeadingZeroExponent,
                ));
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i32::from(digit)))
                .ok_or_else(|| Error::lex(digits_start, LexErrorKind::ExponentOverflow))?;
            self.advance();
        }

        if self.position == digits_start {
            return Err(Error::lex(
                digits_start,
                LexErrorKind::MissingExponentDigits,
            ));
        }

        Ok(if negative { -value } else { value })
    }
}
