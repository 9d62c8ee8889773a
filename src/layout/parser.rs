//! Recursive descent parser for layout strings.
//!
//! Grammar:
//!
//! ```text
//! expr      := term (('+' | '-') term)*
//! term      := unary (('*' | '/') unary)*
//! unary     := ('-' | '+') unary | primary
//! primary   := NUMBER | PERCENT | '(' expr ')'
//!            | ('min' | 'max') '(' expr ',' expr ')'
//!            | source '.' PROPERTY
//!            | PROPERTY
//! source    := '&' | 'parent' | IDENT
//! PROPERTY  := x | left | y | top | w | width | h | height | right | bottom
//!            | iw | innerwidth | ih | innerheight
//! ```
//!
//! A bare `PROPERTY` reads the widget holding the layout. `right` and
//! `bottom` expand to `left + width` and `top + height`. Sizes never include
//! decoration, so the inner sizes read the same fields as `width` and
//! `height`.

use super::tokenizer::{tokenize, Spanned, Token};
use super::value::{BinaryOp, Expr, Property, Target};

/// Errors from layout string parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("layout string is empty")]
    Empty,
    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar { position: usize, found: String },
    #[error("unexpected token '{found}' at position {position}: {message}")]
    UnexpectedToken { position: usize, found: String, message: String },
    #[error("unexpected end of layout string: {0}")]
    UnexpectedEof(String),
    #[error("unknown property '{0}'")]
    UnknownProperty(String),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("percentage '{0}' does not end with '%'")]
    MissingPercent(String),
}

/// Parse a complete layout string into an expression tree.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let tokens = tokenize(input).map_err(|(position, found)| ParseError::UnexpectedChar {
        position,
        found: found.to_owned(),
    })?;

    let mut parser = Parser { tokens, cursor: 0 };
    let expr = parser.parse_expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some(tok) => Err(parser.unexpected(tok, "expected an operator or end of input")),
    }
}

/// Parse a plain percentage (`"80%"`) into a factor (`0.8`).
pub fn parse_percent(input: &str) -> Result<f32, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let Some(number) = trimmed.strip_suffix('%') else {
        return Err(ParseError::MissingPercent(trimmed.to_owned()));
    };
    number
        .trim()
        .parse::<f32>()
        .map(|value| value / 100.0)
        .map_err(|_| ParseError::InvalidNumber(number.to_owned()))
}

fn parse_property(name: &str) -> Option<PropertyRef> {
    match name {
        "x" | "left" => Some(PropertyRef::Plain(Property::Left)),
        "y" | "top" => Some(PropertyRef::Plain(Property::Top)),
        "w" | "width" | "iw" | "innerwidth" => Some(PropertyRef::Plain(Property::Width)),
        "h" | "height" | "ih" | "innerheight" => Some(PropertyRef::Plain(Property::Height)),
        "right" => Some(PropertyRef::Sum(Property::Left, Property::Width)),
        "bottom" => Some(PropertyRef::Sum(Property::Top, Property::Height)),
        _ => None,
    }
}

enum PropertyRef {
    Plain(Property),
    Sum(Property, Property),
}

/// Recursive descent parser state.
struct Parser<'a> {
    tokens: Vec<Spanned<'a>>,
    cursor: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Spanned<'a>> {
        self.tokens.get(self.cursor)
    }

    fn peek_token(&self) -> Option<Token> {
        self.peek().map(|t| t.token)
    }

    fn advance(&mut self) -> Option<Spanned<'a>> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    fn unexpected(&self, tok: &Spanned<'_>, message: &str) -> ParseError {
        ParseError::UnexpectedToken {
            position: tok.position,
            found: tok.text.to_owned(),
            message: message.to_owned(),
        }
    }

    fn expect(&mut self, expected: Token, what: &str) -> Result<Spanned<'a>, ParseError> {
        match self.advance() {
            Some(tok) if tok.token == expected => Ok(tok),
            Some(tok) => Err(self.unexpected(&tok, &format!("expected {what}"))),
            None => Err(ParseError::UnexpectedEof(format!("expected {what}"))),
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_term()?;
        while let Some(op) = self.peek_token().and_then(|t| match t {
            Token::Plus => Some(BinaryOp::Add),
            Token::Minus => Some(BinaryOp::Sub),
            _ => None,
        }) {
            self.advance();
            let rhs = self.parse_term()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary()?;
        while let Some(op) = self.peek_token().and_then(|t| match t {
            Token::Star => Some(BinaryOp::Mul),
            Token::Slash => Some(BinaryOp::Div),
            _ => None,
        }) {
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        match self.peek_token() {
            Some(Token::Minus) => {
                self.advance();
                let inner = self.parse_unary()?;
                Ok(match inner {
                    Expr::Constant(value) => Expr::Constant(-value),
                    other => Expr::Neg(Box::new(other)),
                })
            }
            Some(Token::Plus) => {
                self.advance();
                self.parse_unary()
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let Some(tok) = self.advance() else {
            return Err(ParseError::UnexpectedEof("expected a value".into()));
        };

        match tok.token {
            Token::Number => tok
                .text
                .parse::<f32>()
                .map(Expr::Constant)
                .map_err(|_| ParseError::InvalidNumber(tok.text.to_owned())),
            Token::Percent => parse_percent(tok.text).map(Expr::Relative),
            Token::ParenOpen => {
                let inner = self.parse_expr()?;
                self.expect(Token::ParenClose, "')'")?;
                Ok(inner)
            }
            Token::Ident if matches!(tok.text, "min" | "max")
                && self.peek_token() == Some(Token::ParenOpen) =>
            {
                let op = if tok.text == "min" { BinaryOp::Min } else { BinaryOp::Max };
                self.advance();
                let lhs = self.parse_expr()?;
                self.expect(Token::Comma, "','")?;
                let rhs = self.parse_expr()?;
                self.expect(Token::ParenClose, "')'")?;
                Ok(Expr::binary(op, lhs, rhs))
            }
            Token::Ident
                if self.peek_token() != Some(Token::Dot) && parse_property(tok.text).is_some() =>
            {
                source_expr(Target::This, tok.text)
            }
            Token::Ident | Token::Ampersand => {
                let target = match (tok.token, tok.text) {
                    (Token::Ampersand, _) | (_, "parent") => Target::Parent,
                    (_, name) => Target::Named(name.to_owned()),
                };
                self.expect(Token::Dot, "'.' after widget reference")?;
                let prop = self.expect(Token::Ident, "a property name")?;
                source_expr(target, prop.text)
            }
            _ => Err(self.unexpected(&tok, "expected a value")),
        }
    }
}

fn source_expr(target: Target, name: &str) -> Result<Expr, ParseError> {
    match parse_property(name) {
        Some(PropertyRef::Plain(property)) => Ok(Expr::Source { target, property }),
        Some(PropertyRef::Sum(a, b)) => Ok(Expr::binary(
            BinaryOp::Add,
            Expr::Source { target: target.clone(), property: a },
            Expr::Source { target, property: b },
        )),
        None => Err(ParseError::UnknownProperty(name.to_owned())),
    }
}
