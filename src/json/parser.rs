//! Recursive descent JSON parser.
//!
//! Consumes the token stream produced by the [`Lexer`] and builds a
//! [`Value`] tree bottom-up. The whole input must be exactly one JSON value
//! followed by at most whitespace; anything after it is an error, and a
//! failed parse never yields a partial tree.

use std::collections::BTreeMap;

use crate::error::{JsonError, ParseResult};
use crate::json::lexer::{Lexer, Token};
use crate::json::limits::Limits;
use crate::json::value::Value;

/// JSON parser over any byte source.
pub struct Parser<I: Iterator<Item = u8>> {
    lexer: Lexer<I>,
    current: Token,
    limits: Limits,
    depth: usize,
}

impl<I: Iterator<Item = u8>> Parser<I> {
    /// Create a parser reading from `input`.
    pub fn new(input: I, limits: Limits) -> ParseResult<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            limits,
            depth: 0,
        })
    }

    /// Parse one complete document.
    ///
    /// Fails on the first defect; succeeds only when the entire input is
    /// consumed as exactly one value plus optional trailing whitespace.
    pub fn parse(&mut self) -> ParseResult<Value> {
        let value = self.parse_value()?;

        if self.current != Token::Eof {
            return Err(JsonError::TrailingContent.into());
        }

        Ok(value)
    }

    /// Advance to the next token.
    fn advance(&mut self) -> ParseResult<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Parse a single JSON value.
    fn parse_value(&mut self) -> ParseResult<Value> {
        match &self.current {
            Token::Null => {
                self.advance()?;
                Ok(Value::Null)
            }
            Token::True => {
                self.advance()?;
                Ok(Value::Bool(true))
            }
            Token::False => {
                self.advance()?;
                Ok(Value::Bool(false))
            }
            Token::String(s) => {
                let value = Value::String(s.clone());
                self.advance()?;
                Ok(value)
            }
            Token::Number { text, float } => {
                let value = number_value(text, *float)?;
                self.advance()?;
                Ok(value)
            }
            Token::LeftBrace => self.parse_object(),
            Token::LeftBracket => self.parse_array(),
            Token::Eof => Err(JsonError::UnexpectedEndOfInput.into()),
            token => Err(JsonError::UnexpectedToken(token.describe()).into()),
        }
    }

    /// Parse a JSON object.
    fn parse_object(&mut self) -> ParseResult<Value> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(JsonError::DepthLimitExceeded(self.limits.max_nesting_depth).into());
        }

        // Consume the opening brace.
        self.advance()?;

        let mut members = BTreeMap::new();

        if self.current == Token::RightBrace {
            self.advance()?;
            self.depth -= 1;
            return Ok(Value::Object(members));
        }

        loop {
            let key = match &self.current {
                Token::String(s) => s.clone(),
                Token::Eof => return Err(JsonError::UnexpectedEndOfInput.into()),
                token => return Err(JsonError::UnexpectedToken(token.describe()).into()),
            };
            self.advance()?;

            match &self.current {
                Token::Colon => self.advance()?,
                Token::Eof => return Err(JsonError::UnexpectedEndOfInput.into()),
                token => return Err(JsonError::UnexpectedToken(token.describe()).into()),
            }

            let value = self.parse_value()?;
            // A repeated key replaces the earlier entry: last one wins.
            members.insert(key, value);

            match &self.current {
                Token::Comma => {
                    self.advance()?;
                    if self.current == Token::RightBrace {
                        return Err(JsonError::UnexpectedToken("`}`").into());
                    }
                }
                Token::RightBrace => {
                    self.advance()?;
                    break;
                }
                Token::Eof => return Err(JsonError::UnexpectedEndOfInput.into()),
                token => return Err(JsonError::UnexpectedToken(token.describe()).into()),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(members))
    }

    /// Parse a JSON array.
    fn parse_array(&mut self) -> ParseResult<Value> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(JsonError::DepthLimitExceeded(self.limits.max_nesting_depth).into());
        }

        // Consume the opening bracket.
        self.advance()?;

        let mut items = Vec::new();

        if self.current == Token::RightBracket {
            self.advance()?;
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            let value = self.parse_value()?;
            items.push(value);

            match &self.current {
                Token::Comma => {
                    self.advance()?;
                    if self.current == Token::RightBracket {
                        return Err(JsonError::UnexpectedToken("`]`").into());
                    }
                }
                Token::RightBracket => {
                    self.advance()?;
                    break;
                }
                Token::Eof => return Err(JsonError::UnexpectedEndOfInput.into()),
                token => return Err(JsonError::UnexpectedToken(token.describe()).into()),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }
}

/// Convert a number literal to its in-memory representation.
///
/// Literals without a fraction or exponent become [`Value::Int`]; if the
/// digits overflow `i64` they fall back to [`Value::Double`]. Everything
/// else is a double.
fn number_value(text: &str, float: bool) -> ParseResult<Value> {
    if !float {
        if let Ok(n) = text.parse::<i64>() {
            return Ok(Value::Int(n));
        }
        // The grammar guarantees plain digits here, so the only possible
        // failure is overflow.
    }
    match text.parse::<f64>() {
        Ok(d) => Ok(Value::Double(d)),
        Err(_) => Err(JsonError::InvalidNumber(text.to_string()).into()),
    }
}

/// Parse a JSON document with default limits.
pub fn parse(input: &[u8]) -> ParseResult<Value> {
    parse_with_limits(input, Limits::default())
}

/// Parse a JSON document with caller-chosen limits.
pub fn parse_with_limits(input: &[u8], limits: Limits) -> ParseResult<Value> {
    let mut parser = Parser::new(input.iter().copied(), limits)?;
    parser.parse()
}
