//! Expression grammar implemented with chumsky
//!
//! An explicit grammar over the lexed token stream. Evaluation never goes
//! through dynamic code generation; the parser produces an [`Expr`] tree
//! that the evaluator walks.

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::ExprError;
use crate::expr::ast::{BinaryOp, Expr};
use crate::expr::lexer::{lex, Token};

/// Parse a coordinate expression into an AST
pub fn parse(input: &str) -> Result<Expr, ExprError> {
    let tokens = lex(input).map_err(|span| ExprError::UnknownToken { span })?;
    let len = input.len();

    let token_stream = Stream::from_iter(
        tokens
            .into_iter()
            .map(|(tok, span)| (tok, SimpleSpan::from(span))),
    )
    .map((len..len).into(), |(t, s): (_, _)| (t, s));

    expr_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| match errs.into_iter().next() {
            Some(err) => ExprError::from(err),
            None => ExprError::Syntax {
                span: 0..len,
                message: "empty expression".to_string(),
                expected: Vec::new(),
            },
        })
}

fn expr_parser<'a, I>() -> impl Parser<'a, I, Expr, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let expr = recursive(|expr| {
        // A percent marker binds directly to the numeric literal in front
        // of it: `50%` is one primary term, not `50` modulo something.
        let number = select! {
            Token::Number(n) => n,
        }
        .then(just(Token::Percent).or_not())
        .map(|(n, percent)| {
            if percent.is_some() {
                Expr::Percent(n)
            } else {
                Expr::Number(n)
            }
        });

        let symbol = select! {
            Token::Width => Expr::Width,
            Token::Height => Expr::Height,
        };

        let atom = choice((
            number,
            symbol,
            expr.delimited_by(just(Token::ParenOpen), just(Token::ParenClose)),
        ));

        // Prefix minus, so literal operands like "-5" evaluate the way
        // the arithmetic they appear in would evaluate them.
        let unary = just(Token::Minus)
            .repeated()
            .collect::<Vec<_>>()
            .then(atom)
            .map(|(minuses, inner)| {
                minuses
                    .into_iter()
                    .fold(inner, |e, _| Expr::Neg(Box::new(e)))
            });

        let product_op = choice((
            just(Token::Star).to(BinaryOp::Mul),
            just(Token::Slash).to(BinaryOp::Div),
        ));
        let product = unary
            .clone()
            .then(product_op.then(unary).repeated().collect::<Vec<_>>())
            .map(|(first, rest)| {
                rest.into_iter().fold(first, |lhs, (op, rhs)| Expr::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                })
            });

        let sum_op = choice((
            just(Token::Plus).to(BinaryOp::Add),
            just(Token::Minus).to(BinaryOp::Sub),
        ));
        product
            .clone()
            .then(sum_op.then(product).repeated().collect::<Vec<_>>())
            .map(|(first, rest)| {
                rest.into_iter().fold(first, |lhs, (op, rhs)| Expr::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                })
            })
    });

    expr.then_ignore(end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse("42").unwrap(), Expr::Number(42.0));
        assert_eq!(parse("3.5").unwrap(), Expr::Number(3.5));
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse("50%").unwrap(), Expr::Percent(50.0));
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!(parse("width").unwrap(), Expr::Width);
        assert_eq!(parse("height").unwrap(), Expr::Height);
    }

    #[test]
    fn test_precedence() {
        // 1 + 2 * 3 parses as 1 + (2 * 3)
        let expr = parse("1 + 2 * 3").unwrap();
        assert_eq!(
            expr,
            Expr::Binary {
                op: BinaryOp::Add,
                lhs: Box::new(Expr::Number(1.0)),
                rhs: Box::new(Expr::Binary {
                    op: BinaryOp::Mul,
                    lhs: Box::new(Expr::Number(2.0)),
                    rhs: Box::new(Expr::Number(3.0)),
                }),
            }
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let expr = parse("(1 + 2) * 3").unwrap();
        assert_eq!(
            expr,
            Expr::Binary {
                op: BinaryOp::Mul,
                lhs: Box::new(Expr::Binary {
                    op: BinaryOp::Add,
                    lhs: Box::new(Expr::Number(1.0)),
                    rhs: Box::new(Expr::Number(2.0)),
                }),
                rhs: Box::new(Expr::Number(3.0)),
            }
        );
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(parse("-5").unwrap(), Expr::Neg(Box::new(Expr::Number(5.0))));
    }

    #[test]
    fn test_left_associative_subtraction() {
        // 10 - 2 - 3 parses as (10 - 2) - 3
        let expr = parse("10 - 2 - 3").unwrap();
        assert_eq!(
            expr,
            Expr::Binary {
                op: BinaryOp::Sub,
                lhs: Box::new(Expr::Binary {
                    op: BinaryOp::Sub,
                    lhs: Box::new(Expr::Number(10.0)),
                    rhs: Box::new(Expr::Number(2.0)),
                }),
                rhs: Box::new(Expr::Number(3.0)),
            }
        );
    }

    #[test]
    fn test_trailing_operator_fails() {
        assert!(parse("width +").is_err());
    }

    #[test]
    fn test_unknown_identifier_fails() {
        assert!(parse("depth / 2").is_err());
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(parse("").is_err());
        assert!(parse("   ").is_err());
    }

    #[test]
    fn test_unbalanced_parentheses_fail() {
        assert!(parse("(width + 1").is_err());
        assert!(parse("width + 1)").is_err());
    }
}
