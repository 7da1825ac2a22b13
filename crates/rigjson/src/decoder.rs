//! Recursive-descent decoding of a document into a [`Value`] tree.

use crate::{
    error::{DecodeError, ErrorKind},
    options::{DecoderOptions, NumberWidth},
    scanner::{Scanner, Token},
    value::{Array, Map, Value},
};

/// Decodes one document per call.
///
/// Every call builds fresh session state (cursor, interning caches), so a
/// decoder is cheap to construct and freely reusable, but a single instance
/// must not run two decodes concurrently. Independent decoders share
/// nothing and may run fully in parallel.
///
/// # Examples
///
/// ```rust
/// use rigjson::{DecoderOptions, JsonDecoder, NumberWidth};
///
/// let decoder = JsonDecoder::new(DecoderOptions {
///     numbers: NumberWidth::Single,
///     ..DecoderOptions::default()
/// });
/// let doc = decoder.decode(r#"{"bones":[{"name":"root"}]}"#).unwrap();
/// assert!(doc.as_object().unwrap().contains_key("bones"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder {
    options: DecoderOptions,
}

impl JsonDecoder {
    #[must_use]
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    /// Decodes a text buffer. The input is processed as bytes under the
    /// same ASCII-oriented grammar as [`decode_bytes`](Self::decode_bytes).
    ///
    /// # Errors
    ///
    /// Returns the first invalid condition observed; nothing past it is
    /// scanned.
    pub fn decode(&self, text: &str) -> Result<Value, DecodeError> {
        self.decode_bytes(text.as_bytes())
    }

    /// Decodes a raw byte buffer into a single top-level value. Bytes after
    /// that value are not inspected.
    ///
    /// # Errors
    ///
    /// Returns the first invalid condition observed; nothing past it is
    /// scanned.
    pub fn decode_bytes(&self, json: &[u8]) -> Result<Value, DecodeError> {
        let mut parse = Parse {
            scanner: Scanner::new(json),
            numbers: self.options.numbers,
            skip_prefixes: self.options.skip_member_prefixes,
        };
        parse.parse_value()
    }
}

/// Decodes a skeleton document the way runtime loaders do: single-precision
/// numbers with value interning.
///
/// # Errors
///
/// Returns the first invalid condition observed in the document.
pub fn deserialize(json: &[u8]) -> Result<Value, DecodeError> {
    JsonDecoder::new(DecoderOptions {
        numbers: NumberWidth::Single,
        ..DecoderOptions::default()
    })
    .decode_bytes(json)
}

/// One decode session: a scanner over the input plus the configuration the
/// productions consult. Errors unwind through `?`, so the first one aborts
/// the whole tree build.
struct Parse<'doc> {
    scanner: Scanner<'doc>,
    numbers: NumberWidth,
    skip_prefixes: &'static [&'static str],
}

impl Parse<'_> {
    fn parse_value(&mut self) -> Result<Value, DecodeError> {
        match self.scanner.lookahead() {
            Token::String => Ok(Value::String(self.scanner.parse_string()?)),
            Token::Number => Ok(match self.numbers {
                NumberWidth::Single => Value::Float(self.scanner.parse_float()),
                NumberWidth::Double => Value::Double(self.scanner.parse_double()),
            }),
            Token::ObjectOpen => self.parse_object(),
            Token::ArrayOpen => self.parse_array(),
            Token::True => {
                self.scanner.next_token();
                Ok(Value::Boolean(true))
            }
            Token::False => {
                self.scanner.next_token();
                Ok(Value::Boolean(false))
            }
            Token::Null => {
                self.scanner.next_token();
                Ok(Value::Null)
            }
            _ => Err(self.scanner.error(ErrorKind::UnableToParseValue)),
        }
    }

    fn parse_object(&mut self) -> Result<Value, DecodeError> {
        let capacity = self.scanner.estimate_len();
        self.scanner.next_token(); // {
        let mut members = Map::with_capacity(capacity);

        loop {
            match self.scanner.lookahead() {
                Token::None => return Err(self.scanner.error(ErrorKind::InvalidToken)),
                Token::Comma => {
                    self.scanner.next_token();
                }
                Token::ObjectClose => {
                    self.scanner.next_token();
                    return Ok(Value::Object(members));
                }
                _ => {
                    let name = self.scanner.parse_string()?;

                    if self.skips(&name) {
                        self.skip_member()?;
                        continue;
                    }

                    if self.scanner.next_token() != Token::Colon {
                        return Err(self.scanner.error(ErrorKind::ExpectedColon));
                    }

                    let value = self.parse_value()?;
                    if !value.is_null() {
                        members.insert(name, value);
                    }
                }
            }
        }
    }

    fn parse_array(&mut self) -> Result<Value, DecodeError> {
        let capacity = self.scanner.estimate_len();
        self.scanner.next_token(); // [
        let mut elements = Array::with_capacity(capacity);

        loop {
            match self.scanner.lookahead() {
                Token::None => return Err(self.scanner.error(ErrorKind::InvalidToken)),
                Token::Comma => {
                    self.scanner.next_token();
                }
                Token::ArrayClose => {
                    self.scanner.next_token();
                    return Ok(Value::Array(elements));
                }
                _ => elements.push(self.parse_value()?),
            }
        }
    }

    fn skips(&self, name: &str) -> bool {
        self.skip_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix))
    }

    /// Discards one `name: value` member after its name was parsed. Object
    /// and array values are skipped without materializing; scalars are
    /// parsed and dropped.
    fn skip_member(&mut self) -> Result<(), DecodeError> {
        if self.scanner.next_token() != Token::Colon {
            return Err(self.scanner.error(ErrorKind::ExpectedColon));
        }
        match self.scanner.lookahead() {
            Token::ObjectOpen | Token::ArrayOpen => self.scanner.skip_value(),
            _ => {
                self.parse_value()?;
            }
        }
        Ok(())
    }
}
