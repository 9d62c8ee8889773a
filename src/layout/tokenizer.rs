//! logos-based tokenizer for layout expression strings.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `80%` as [`Token::Percent`] beats `80` + `%`)
//! 2. For equal length matches, earlier-defined variants win

use logos::Logos;

/// Layout expression token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Percentage of the parent's matching dimension: `80%`, `12.5%`.
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)%")]
    Percent,

    /// Unsigned number: `10`, `2.5`, `.5`.
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)")]
    Number,

    /// Widget name, property name, `min`, `max` or `parent`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    /// `&` (the parent container).
    #[token("&")]
    Ampersand,

    /// `.`
    #[token(".")]
    Dot,

    /// `,`
    #[token(",")]
    Comma,

    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,

    /// `*`
    #[token("*")]
    Star,

    /// `/`
    #[token("/")]
    Slash,

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,
}

/// A token with the byte offset it starts at and its source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<'a> {
    pub token: Token,
    pub text: &'a str,
    pub position: usize,
}

/// Tokenize a layout string.
///
/// Returns the byte offset and text of the first unrecognized input on failure.
pub fn tokenize(input: &str) -> Result<Vec<Spanned<'_>>, (usize, &str)> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(input).spanned() {
        let text = &input[span.clone()];
        match result {
            Ok(token) => tokens.push(Spanned { token, text, position: span.start }),
            Err(()) => return Err((span.start, text)),
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input)
            .expect("input should lex")
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_numbers_and_percent() {
        let result = tokenize("10 2.5 .5 80%").unwrap();
        let pairs: Vec<_> = result.iter().map(|t| (t.token, t.text)).collect();
        assert_eq!(
            pairs,
            vec![
                (Token::Number, "10"),
                (Token::Number, "2.5"),
                (Token::Number, ".5"),
                (Token::Percent, "80%"),
            ]
        );
    }

    #[test]
    fn test_percent_beats_number() {
        assert_eq!(tokens("50%"), vec![Token::Percent]);
    }

    #[test]
    fn test_reference() {
        assert_eq!(tokens("button.width"), vec![Token::Ident, Token::Dot, Token::Ident]);
        assert_eq!(tokens("&.height"), vec![Token::Ampersand, Token::Dot, Token::Ident]);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            tokens("( + - * / , )"),
            vec![
                Token::ParenOpen,
                Token::Plus,
                Token::Minus,
                Token::Star,
                Token::Slash,
                Token::Comma,
                Token::ParenClose,
            ]
        );
    }

    #[test]
    fn test_positions() {
        let result = tokenize("  a + 3").unwrap();
        assert_eq!(result[0].position, 2);
        assert_eq!(result[1].position, 4);
        assert_eq!(result[2].position, 6);
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(tokenize("10 # 3"), Err((3, "#")));
    }
}
