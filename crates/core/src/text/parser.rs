//! JSON text parser for dotjson.
//!
//! A recursive-descent parser producing a [`JsonValue`] tree:
//! - `null` / `true` / `false` literals
//! - numbers, keeping the integer/float distinction
//! - strings with the full JSON escape set, including `\uXXXX` surrogate pairs
//! - arrays and objects; object keys keep source order, duplicate keys last-wins
//!
//! Anything after the top-level value (other than whitespace) is an error.

use crate::value::{JsonObject, JsonValue, Number};
use thiserror::Error;

/// Error type for JSON text parsing.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message} at offset {position}")]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

impl ParseError {
    fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

/// Parser state.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if matches!(c, ' ' | '\t' | '\n' | '\r') {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            Some(c) => Err(ParseError::new(
                format!("expected '{}', found '{}'", expected, c),
                self.pos,
            )),
            None => Err(ParseError::new(
                format!("expected '{}', found end of input", expected),
                self.pos,
            )),
        }
    }

    fn parse_value(&mut self) -> Result<JsonValue, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some('"') => self.parse_string().map(JsonValue::String),
            Some('t') => self.parse_keyword("true", JsonValue::Bool(true)),
            Some('f') => self.parse_keyword("false", JsonValue::Bool(false)),
            Some('n') => self.parse_keyword("null", JsonValue::Null),
            Some(c) if c == '-' || c.is_ascii_digit() => self.parse_number(),
            Some(c) => Err(ParseError::new(
                format!("expected a JSON value, found '{}'", c),
                self.pos,
            )),
            None => Err(ParseError::new(
                "expected a JSON value, found end of input",
                self.pos,
            )),
        }
    }

    fn parse_keyword(&mut self, keyword: &str, value: JsonValue) -> Result<JsonValue, ParseError> {
        if self.input[self.pos..].starts_with(keyword) {
            self.pos += keyword.len();
            Ok(value)
        } else {
            Err(ParseError::new(
                format!("expected '{}'", keyword),
                self.pos,
            ))
        }
    }

    fn parse_object(&mut self) -> Result<JsonValue, ParseError> {
        self.expect('{')?;
        let mut obj = JsonObject::new();

        self.skip_whitespace();
        if self.peek() == Some('}') {
            self.advance();
            return Ok(JsonValue::Object(obj));
        }

        loop {
            self.skip_whitespace();
            let key = self.parse_string()?;
            self.expect(':')?;
            let value = self.parse_value()?;
            // Duplicate keys: the last occurrence wins.
            obj.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.advance(),
                Some('}') => {
                    self.advance();
                    return Ok(JsonValue::Object(obj));
                }
                Some(c) => {
                    return Err(ParseError::new(
                        format!("expected ',' or '}}', found '{}'", c),
                        self.pos,
                    ))
                }
                None => {
                    return Err(ParseError::new(
                        "expected ',' or '}', found end of input",
                        self.pos,
                    ))
                }
            }
        }
    }

    fn parse_array(&mut self) -> Result<JsonValue, ParseError> {
        self.expect('[')?;
        let mut items = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.advance();
            return Ok(JsonValue::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.advance(),
                Some(']') => {
                    self.advance();
                    return Ok(JsonValue::Array(items));
                }
                Some(c) => {
                    return Err(ParseError::new(
                        format!("expected ',' or ']', found '{}'", c),
                        self.pos,
                    ))
                }
                None => {
                    return Err(ParseError::new(
                        "expected ',' or ']', found end of input",
                        self.pos,
                    ))
                }
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some('"') => self.advance(),
            _ => return Err(ParseError::new("expected string", self.pos)),
        }

        let mut result = String::new();
        loop {
            match self.peek() {
                None => return Err(ParseError::new("unterminated string", self.pos)),
                Some('"') => {
                    self.advance();
                    return Ok(result);
                }
                Some('\\') => {
                    self.advance();
                    result.push(self.parse_escape()?);
                }
                Some(c) if (c as u32) < 0x20 => {
                    return Err(ParseError::new(
                        "unescaped control character in string",
                        self.pos,
                    ))
                }
                Some(c) => {
                    self.advance();
                    result.push(c);
                }
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char, ParseError> {
        let c = match self.peek() {
            Some(c) => c,
            None => return Err(ParseError::new("unterminated escape", self.pos)),
        };
        self.advance();
        match c {
            '"' => Ok('"'),
            '\\' => Ok('\\'),
            '/' => Ok('/'),
            'b' => Ok('\u{0008}'),
            'f' => Ok('\u{000C}'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'u' => self.parse_unicode_escape(),
            _ => Err(ParseError::new(
                format!("invalid escape '\\{}'", c),
                self.pos,
            )),
        }
    }

    fn parse_unicode_escape(&mut self) -> Result<char, ParseError> {
        let high = self.parse_hex4()?;
        let code = match high {
            // High surrogate: a \uXXXX low surrogate must follow.
            0xD800..=0xDBFF => {
                if !self.input[self.pos..].starts_with("\\u") {
                    return Err(ParseError::new("unpaired surrogate", self.pos));
                }
                self.pos += 2;
                let low = self.parse_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(ParseError::new("invalid low surrogate", self.pos));
                }
                0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(ParseError::new("unpaired surrogate", self.pos)),
            other => other,
        };
        char::from_u32(code).ok_or_else(|| ParseError::new("invalid unicode escape", self.pos))
    }

    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let start = self.pos;
        let digits = self
            .input
            .get(start..start + 4)
            .ok_or_else(|| ParseError::new("truncated \\u escape", start))?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::new("invalid \\u escape", start));
        }
        let code = u32::from_str_radix(digits, 16)
            .map_err(|_| ParseError::new("invalid \\u escape", start))?;
        self.pos += 4;
        Ok(code)
    }

    fn parse_number(&mut self) -> Result<JsonValue, ParseError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }

        // Integer part: "0" alone, or a nonzero digit followed by more digits.
        match self.peek() {
            Some('0') => self.advance(),
            Some(c) if c.is_ascii_digit() => {
                while self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                    self.advance();
                }
            }
            _ => return Err(ParseError::new("expected digit", self.pos)),
        }

        let mut is_float = false;
        if self.peek() == Some('.') {
            is_float = true;
            self.advance();
            if !self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                return Err(ParseError::new("expected digit after '.'", self.pos));
            }
            while self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                self.advance();
            }
        }
        if matches!(self.peek(), Some('e') | Some('E')) {
            is_float = true;
            self.advance();
            if matches!(self.peek(), Some('+') | Some('-')) {
                self.advance();
            }
            if !self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                return Err(ParseError::new("expected digit in exponent", self.pos));
            }
            while self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                self.advance();
            }
        }

        let literal = &self.input[start..self.pos];
        if !is_float {
            if let Ok(i) = literal.parse::<i64>() {
                return Ok(JsonValue::Number(Number::Int(i)));
            }
            // Integer literal outside i64 range: fall through to f64.
        }
        literal
            .parse::<f64>()
            .map(|f| JsonValue::Number(Number::Float(f)))
            .map_err(|_| ParseError::new("invalid number", start))
    }
}

/// Parses a complete JSON document into a [`JsonValue`].
pub fn parse(input: &str) -> Result<JsonValue, ParseError> {
    let mut parser = Parser::new(input);
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.pos != parser.input.len() {
        return Err(ParseError::new(
            "unexpected trailing characters",
            parser.pos,
        ));
    }
    Ok(value)
}
