//! Error types for coordinate expression parsing and evaluation
//!
//! Rendering never consumes these: a coordinate that fails to resolve
//! degrades to `0` so one bad operand cannot take down the whole path.
//! The errors exist for the diagnostic surfaces (`try_resolve`, the CLI
//! `--check` pass) that want to tell the author what is wrong.

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in an expression string
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("Unrecognized character at {span:?}")]
    UnknownToken { span: Span },

    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },

    #[error("Expression did not evaluate to a finite number")]
    NonFinite,
}

impl ExprError {
    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, name: &str) -> String {
        let mut buf = Vec::new();
        let (span, label) = match self {
            ExprError::UnknownToken { span } => {
                (span.clone(), "not part of the expression language".to_string())
            }
            ExprError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };
                (span.clone(), format!("{}{}", message, expected_str))
            }
            ExprError::NonFinite => (
                0..source.len(),
                "evaluates to a non-finite number".to_string(),
            ),
        };

        Report::build(ReportKind::Error, name, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((name, span))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
            .write((name, Source::from(source)), &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }
}

impl<'a> From<chumsky::error::Rich<'a, crate::expr::lexer::Token>> for ExprError {
    fn from(err: chumsky::error::Rich<'a, crate::expr::lexer::Token>) -> Self {
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => match found {
                Some(tok) => format!("Unexpected {}", format_token(tok)),
                None => "Unexpected end of expression".to_string(),
            },
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of expression".to_string()),
                chumsky::error::RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                chumsky::error::RichPattern::Any => Some("any token".to_string()),
                chumsky::error::RichPattern::SomethingElse => None,
            })
            .collect();

        ExprError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &crate::expr::lexer::Token) -> String {
    use crate::expr::lexer::Token;
    match tok {
        Token::Ident(s) => format!("identifier '{}'", s),
        Token::Number(n) => format!("number {}", n),
        Token::Width => "symbol 'width'".to_string(),
        Token::Height => "symbol 'height'".to_string(),
        Token::Plus => "'+'".to_string(),
        Token::Minus => "'-'".to_string(),
        Token::Star => "'*'".to_string(),
        Token::Slash => "'/'".to_string(),
        Token::Percent => "'%'".to_string(),
        Token::ParenOpen => "'('".to_string(),
        Token::ParenClose => "')'".to_string(),
    }
}
