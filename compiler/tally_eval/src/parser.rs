//! Recursive-descent parser for the arithmetic grammar.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('-' | '+') unary | power
//! power   := postfix ('**' unary)?
//! postfix := primary '!'?
//! primary := NUMBER | 'sqrt' '(' expr ')' | '(' expr ')'
//! ```
//!
//! `**` binds tighter than a leading minus (`-2**2 == -4`) and is
//! right-associative through `unary`. A `!` is only meaningful here to
//! recognize factorials that were too large to expand ahead of time.

use crate::operators::BinaryOp;
use crate::token::{lex, Spanned, Token};
use crate::{EvalError, EvalLimits};

/// Parsed expression tree.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Expr {
    Number(f64),
    Neg(Box<Expr>),
    Sqrt(Box<Expr>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

pub(crate) struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Spanned>,
    pos: usize,
    max_factorial: u64,
}

impl<'src> Parser<'src> {
    /// Parse a complete expression; trailing tokens are an error.
    pub(crate) fn parse(source: &'src str, limits: &EvalLimits) -> Result<Expr, EvalError> {
        let mut parser = Parser {
            source,
            tokens: lex(source)?,
            pos: 0,
            max_factorial: limits.max_factorial,
        };
        let expr = parser.parse_expr()?;
        if parser.pos < parser.tokens.len() {
            return Err(parser.unexpected());
        }
        Ok(expr)
    }

    fn current_kind(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(t, _)| *t)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn check(&self, token: Token) -> bool {
        self.current_kind() == Some(token)
    }

    fn expect(&mut self, token: Token) -> Result<(), EvalError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Error for the current position.
    fn unexpected(&self) -> EvalError {
        match self.tokens.get(self.pos) {
            None => EvalError::UnexpectedEnd,
            Some((Token::Ident, span)) => EvalError::UnknownIdentifier {
                name: self.source[span.clone()].to_owned(),
            },
            Some((_, span)) => EvalError::UnexpectedToken {
                found: self.source[span.clone()].to_owned(),
                offset: span.start,
            },
        }
    }

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_kind()? {
            Token::Plus => Some(BinaryOp::Add),
            Token::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_kind()? {
            Token::Star => Some(BinaryOp::Mul),
            Token::Slash => Some(BinaryOp::Div),
            Token::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.parse_term()?;
        while let Some(op) = self.match_additive_op() {
            self.advance();
            let right = self.parse_term()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.match_multiplicative_op() {
            self.advance();
            let right = self.parse_unary()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, EvalError> {
        match self.current_kind() {
            Some(Token::Minus) => {
                self.advance();
                Ok(Expr::Neg(Box::new(self.parse_unary()?)))
            }
            Some(Token::Plus) => {
                self.advance();
                self.parse_unary()
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> Result<Expr, EvalError> {
        let base = self.parse_postfix()?;
        if self.check(Token::StarStar) {
            self.advance();
            let exponent = self.parse_unary()?;
            return Ok(binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    /// A surviving `!` after an integer literal means the factorial was
    /// left unexpanded because it is too large.
    fn parse_postfix(&mut self) -> Result<Expr, EvalError> {
        let expr = self.parse_primary()?;
        if !self.check(Token::Bang) {
            return Ok(expr);
        }
        if let Expr::Number(n) = expr {
            if n.fract() == 0.0 && n > self.max_factorial as f64 {
                return Err(EvalError::RunawayFactorial { operand: n as u64 });
            }
        }
        Err(self.unexpected())
    }

    fn parse_primary(&mut self) -> Result<Expr, EvalError> {
        match self.current_kind() {
            Some(Token::Number(n)) => {
                self.advance();
                Ok(Expr::Number(n))
            }
            Some(Token::Sqrt) => {
                self.advance();
                self.expect(Token::LParen)?;
                let inner = self.parse_expr()?;
                self.expect(Token::RParen)?;
                Ok(Expr::Sqrt(Box::new(inner)))
            }
            Some(Token::LParen) => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            _ => Err(self.unexpected()),
        }
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}
