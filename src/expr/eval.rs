//! Expression evaluation against concrete dimensions
//!
//! The resolver is fail-safe by contract: a malformed or unevaluable
//! expression yields `0.0` rather than an error, because a single bad
//! coordinate must not abort rendering of the whole path. Callers that
//! want the underlying error (diagnostics, validation passes) use the
//! `try_` variants.

use crate::error::ExprError;
use crate::expr::ast::{BinaryOp, Expr};
use crate::expr::grammar::parse;

/// How a percentage literal is grounded during evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PercentBasis {
    /// `N%` is the bare fraction `N / 100`.
    Fraction,
    /// `N%` is `N / 100` of the given dimension. The path compiler binds
    /// this to the operand's axis (width for x, height for y).
    Scaled(f64),
}

/// Resolve an expression to a number, substituting `0.0` on any failure.
pub fn resolve(input: &str, width: f64, height: f64) -> f64 {
    try_resolve(input, width, height).unwrap_or(0.0)
}

/// Resolve an expression, surfacing the failure instead of masking it.
pub fn try_resolve(input: &str, width: f64, height: f64) -> Result<f64, ExprError> {
    try_resolve_with(input, width, height, PercentBasis::Fraction)
}

/// Resolve with an explicit percent basis, substituting `0.0` on failure.
pub fn resolve_with(input: &str, width: f64, height: f64, basis: PercentBasis) -> f64 {
    try_resolve_with(input, width, height, basis).unwrap_or(0.0)
}

/// Resolve with an explicit percent basis, surfacing the failure.
pub fn try_resolve_with(
    input: &str,
    width: f64,
    height: f64,
    basis: PercentBasis,
) -> Result<f64, ExprError> {
    let expr = parse(input)?;
    let value = eval(&expr, width, height, basis);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExprError::NonFinite)
    }
}

fn eval(expr: &Expr, width: f64, height: f64, basis: PercentBasis) -> f64 {
    match expr {
        Expr::Number(n) => *n,
        Expr::Percent(n) => match basis {
            PercentBasis::Fraction => n / 100.0,
            PercentBasis::Scaled(dimension) => n / 100.0 * dimension,
        },
        Expr::Width => width,
        Expr::Height => height,
        Expr::Neg(inner) => -eval(inner, width, height, basis),
        Expr::Binary { op, lhs, rhs } => op.apply(
            eval(lhs, width, height, basis),
            eval(rhs, width, height, basis),
        ),
    }
}
