//! Lexer for coordinate expressions using logos

use logos::Logos;

/// Byte range in an expression string
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Dimension symbols
    #[token("width")]
    Width,
    #[token("height")]
    Height,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // Percentage marker, always a suffix on a numeric literal
    #[token("%")]
    Percent,

    // Delimiters
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,

    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Identifiers must come after the dimension keywords. Anything that
    // lexes as an identifier other than `width`/`height` is rejected by
    // the grammar, which is what makes symbol recognition word-boundary
    // safe: `heightx` is one identifier, never `height` plus garbage.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string(), priority = 1)]
    Ident(String),
}

/// Lex an expression into tokens with spans.
///
/// Unlike a forgiving document lexer, this one fails on the first
/// unrecognized character: an operand with stray punctuation must resolve
/// to zero, not to whatever its recognizable fragments evaluate to.
pub fn lex(input: &str) -> Result<Vec<(Token, Span)>, Span> {
    let mut tokens = Vec::new();
    for (token, span) in Token::lexer(input).spanned() {
        match token {
            Ok(t) => tokens.push((t, span)),
            Err(()) => return Err(span),
        }
    }
    Ok(tokens)
}
