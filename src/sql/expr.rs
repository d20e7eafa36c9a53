//! Expression AST - the core of SQL expression building.
//!
//! This module provides a strongly-typed AST for the SQL expressions the
//! profiler emits, with exhaustive pattern matching enforced by the compiler.

use super::dialect::Dialect;
use super::query::SelectExpr;
use super::token::{Token, TokenStream};
use super::types::DataType;

// =============================================================================
// Expression AST
// =============================================================================

/// A SQL expression.
///
/// Every variant must be handled in `to_tokens()` - the compiler enforces this.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Column reference
    Column(String),

    /// Literal values
    Literal(Literal),

    /// Positional parameter, bound when the statement is executed
    Param,

    /// Binary operation: left op right
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },

    /// Function call: name(args...)
    Function {
        name: String,
        args: Vec<Expr>,
        distinct: bool,
    },

    /// Aggregate restricted to matching rows: agg FILTER (WHERE condition)
    Filter {
        agg: Box<Expr>,
        condition: Box<Expr>,
    },

    /// NOT expr
    Not(Box<Expr>),

    /// CAST(expr AS type)
    Cast {
        expr: Box<Expr>,
        data_type: DataType,
    },

    /// Wildcard: *
    Star,
}

/// Literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Comparison
    Eq,
    // Logical
    And,
    // Arithmetic
    Minus,
}

// =============================================================================
// Token Generation
// =============================================================================

impl Expr {
    /// Convert this expression to a token stream (dialect-agnostic).
    pub fn to_tokens(&self) -> TokenStream {
        self.to_tokens_for_dialect(Dialect::default())
    }

    /// Convert this expression to a token stream for a specific dialect.
    pub fn to_tokens_for_dialect(&self, dialect: Dialect) -> TokenStream {
        let mut ts = TokenStream::new();

        match self {
            Expr::Column(column) => {
                ts.push(Token::Ident(column.clone()));
            }

            Expr::Literal(lit) => {
                ts.push(match lit {
                    Literal::String(s) => Token::LitString(s.clone()),
                });
            }

            Expr::Param => {
                ts.push(Token::Placeholder);
            }

            Expr::BinaryOp { left, op, right } => {
                ts.append(&left.to_tokens_for_dialect(dialect));
                ts.space();
                ts.push(binary_op_to_token(*op));
                ts.space();
                ts.append(&right.to_tokens_for_dialect(dialect));
            }

            Expr::Function {
                name,
                args,
                distinct,
            } => {
                ts.push(Token::FunctionName(name.clone()));
                ts.lparen();
                if *distinct {
                    ts.push(Token::Distinct).space();
                }
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        ts.comma().space();
                    }
                    ts.append(&arg.to_tokens_for_dialect(dialect));
                }
                ts.rparen();
            }

            Expr::Filter { agg, condition } => {
                ts.append(&agg.to_tokens_for_dialect(dialect));
                ts.space().push(Token::Filter).space().lparen();
                ts.push(Token::Where).space();
                ts.append(&condition.to_tokens_for_dialect(dialect));
                ts.rparen();
            }

            Expr::Not(expr) => {
                ts.push(Token::Not).space();
                ts.append(&expr.to_tokens_for_dialect(dialect));
            }

            Expr::Cast { expr, data_type } => {
                ts.push(Token::Cast).lparen();
                ts.append(&expr.to_tokens_for_dialect(dialect));
                ts.space().push(Token::As).space();
                ts.push(Token::TypeName(data_type.clone()));
                ts.rparen();
            }

            Expr::Star => {
                ts.push(Token::Star);
            }
        }

        ts
    }
}

fn binary_op_to_token(op: BinaryOperator) -> Token {
    match op {
        BinaryOperator::Eq => Token::Eq,
        BinaryOperator::And => Token::And,
        BinaryOperator::Minus => Token::Minus,
    }
}

// =============================================================================
// Expression Constructors
// =============================================================================

/// Create a column reference.
pub fn col(name: &str) -> Expr {
    Expr::Column(name.into())
}

/// Create a string literal.
pub fn lit_str(s: &str) -> Expr {
    Expr::Literal(Literal::String(s.into()))
}

/// Create a positional parameter (`?`).
pub fn param() -> Expr {
    Expr::Param
}

/// Create a star (*) expression.
pub fn star() -> Expr {
    Expr::Star
}

/// NOT expr
pub fn not(expr: Expr) -> Expr {
    Expr::Not(Box::new(expr))
}

/// ISFINITE(expr) - false for NaN and infinities, NULL for NULL.
pub fn isfinite(expr: Expr) -> Expr {
    func("isfinite", vec![expr])
}

/// CAST(expr AS data_type)
pub fn cast(expr: Expr, data_type: DataType) -> Expr {
    Expr::Cast {
        expr: Box::new(expr),
        data_type,
    }
}

// =============================================================================
// Aggregate Functions
// =============================================================================

/// COUNT(expr)
pub fn count(expr: Expr) -> Expr {
    Expr::Function {
        name: "COUNT".into(),
        args: vec![expr],
        distinct: false,
    }
}

/// COUNT(*)
pub fn count_star() -> Expr {
    Expr::Function {
        name: "COUNT".into(),
        args: vec![star()],
        distinct: false,
    }
}

/// COUNT(DISTINCT expr)
pub fn count_distinct(expr: Expr) -> Expr {
    Expr::Function {
        name: "COUNT".into(),
        args: vec![expr],
        distinct: true,
    }
}

/// AVG(expr)
pub fn avg(expr: Expr) -> Expr {
    func("AVG", vec![expr])
}

/// MIN(expr)
pub fn min(expr: Expr) -> Expr {
    func("MIN", vec![expr])
}

/// MAX(expr)
pub fn max(expr: Expr) -> Expr {
    func("MAX", vec![expr])
}

/// STDDEV_SAMP(expr) - sample standard deviation, NULL for fewer than two values.
pub fn stddev_samp(expr: Expr) -> Expr {
    func("STDDEV_SAMP", vec![expr])
}

/// Generic function call.
pub fn func(name: &str, args: Vec<Expr>) -> Expr {
    Expr::Function {
        name: name.into(),
        args,
        distinct: false,
    }
}

// =============================================================================
// Fluent Extension Trait
// =============================================================================

/// Fluent methods for building expressions.
pub trait ExprExt: Sized {
    fn into_expr(self) -> Expr;

    /// self = other
    fn eq(self, other: impl Into<Expr>) -> Expr {
        Expr::BinaryOp {
            left: Box::new(self.into_expr()),
            op: BinaryOperator::Eq,
            right: Box::new(other.into()),
        }
    }

    /// self AND other
    fn and(self, other: impl Into<Expr>) -> Expr {
        Expr::BinaryOp {
            left: Box::new(self.into_expr()),
            op: BinaryOperator::And,
            right: Box::new(other.into()),
        }
    }

    /// self - other
    fn sub(self, other: impl Into<Expr>) -> Expr {
        Expr::BinaryOp {
            left: Box::new(self.into_expr()),
            op: BinaryOperator::Minus,
            right: Box::new(other.into()),
        }
    }

    /// self FILTER (WHERE condition), for aggregates.
    fn filter(self, condition: Expr) -> Expr {
        Expr::Filter {
            agg: Box::new(self.into_expr()),
            condition: Box::new(condition),
        }
    }

    /// Alias this expression for use in a SELECT list.
    fn alias(self, name: &str) -> SelectExpr {
        SelectExpr::new(self.into_expr()).alias(name)
    }
}

impl ExprExt for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        lit_str(s)
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        Expr::Literal(Literal::String(s))
    }
}

// =============================================================================
// Tests
// =============================================================================
