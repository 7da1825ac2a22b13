//! Byte-level scanner over a single in-memory document.
//!
//! The scanner owns the cursor (byte offset + line counter) and the two
//! session-scoped interning caches. All movement happens through `&mut self`
//! methods, so no two parses can alias the same cursor.

#![allow(clippy::cast_possible_truncation)]

use std::sync::Arc;

use crate::{
    error::{DecodeError, ErrorKind},
    intern::{FloatCache, StringCache},
    keys, numbers,
};

/// A lexical unit classified at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    None,
    Null,
    True,
    False,
    Colon,
    Comma,
    String,
    Number,
    ObjectOpen,
    ObjectClose,
    ArrayOpen,
    ArrayClose,
}

pub(crate) struct Scanner<'doc> {
    json: &'doc [u8],
    index: usize,
    line: usize,
    /// Reusable work buffer for the general string scan.
    scratch: String,
    strings: StringCache,
    floats: FloatCache,
    /// Session canonicals for the hot-key literals, also seeded into
    /// `strings` so both string paths agree on identity.
    hot_keys: [Arc<str>; keys::HOT_KEYS.len()],
}

impl<'doc> Scanner<'doc> {
    pub(crate) fn new(json: &'doc [u8]) -> Self {
        let mut scanner = Scanner {
            json,
            index: 0,
            line: 1,
            scratch: String::with_capacity(64),
            strings: StringCache::default(),
            floats: FloatCache::default(),
            hot_keys: std::array::from_fn(|i| Arc::from(keys::HOT_KEYS[i])),
        };
        scanner.reset();
        scanner
    }

    /// Rewinds to the start of the document and drops all session state.
    /// Must be called before a scanner is reused for another decode.
    pub(crate) fn reset(&mut self) {
        self.index = 0;
        self.line = 1;
        self.scratch.clear();
        self.strings.clear();
        self.floats.clear();
        self.seed_hot_keys();
    }

    fn seed_hot_keys(&mut self) {
        for key in &self.hot_keys {
            self.strings.seed(Arc::clone(key));
        }
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn error(&self, kind: ErrorKind) -> DecodeError {
        DecodeError {
            kind,
            line: self.line,
        }
    }

    /// Advances past whitespace, counting newlines for error reporting.
    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.json.get(self.index) {
            if c == b'\n' {
                self.line += 1;
            }
            if !c.is_ascii_whitespace() {
                break;
            }
            self.index += 1;
        }
    }

    /// Classifies the token at the cursor without consuming it. Idempotent
    /// until a consuming call intervenes.
    pub(crate) fn lookahead(&mut self) -> Token {
        self.skip_whitespace();
        let mut probe = self.index;
        Self::token_at(self.json, &mut probe)
    }

    /// Consumes one token. String and number content is not consumed here:
    /// after a `lookahead` classification the parse routines take over from
    /// the unconsumed cursor.
    pub(crate) fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        Self::token_at(self.json, &mut self.index)
    }

    /// The single classifier behind `lookahead` and `next_token`, so both
    /// agree on the grammar. Literal keywords only match when the remaining
    /// buffer can hold them in full.
    fn token_at(json: &[u8], index: &mut usize) -> Token {
        let Some(&c) = json.get(*index) else {
            return Token::None;
        };
        *index += 1;

        match c {
            b'{' => return Token::ObjectOpen,
            b'}' => return Token::ObjectClose,
            b'[' => return Token::ArrayOpen,
            b']' => return Token::ArrayClose,
            b',' => return Token::Comma,
            b'"' => return Token::String,
            b'0'..=b'9' | b'-' => return Token::Number,
            b':' => return Token::Colon,
            _ => {}
        }
        *index -= 1;

        let rest = &json[*index..];
        if rest.starts_with(b"false") {
            *index += 5;
            return Token::False;
        }
        if rest.starts_with(b"true") {
            *index += 4;
            return Token::True;
        }
        if rest.starts_with(b"null") {
            *index += 4;
            return Token::Null;
        }

        Token::None
    }

    /// Parses the string literal at the cursor into a canonical instance.
    ///
    /// Known high-frequency keys resolve through the hot-key table without
    /// entering the scan loop; everything else is scanned with escape
    /// translation and interned, so repeated content within one session
    /// shares a single allocation.
    pub(crate) fn parse_string(&mut self) -> Result<Arc<str>, DecodeError> {
        self.skip_whitespace();

        if let Some(id) = keys::match_hot_key(&self.json[self.index + 1..]) {
            self.index += keys::HOT_KEYS[id].len() + 2;
            return Ok(Arc::clone(&self.hot_keys[id]));
        }

        self.parse_string_slow()
    }

    fn parse_string_slow(&mut self) -> Result<Arc<str>, DecodeError> {
        self.scratch.clear();
        self.index += 1; // opening quote

        loop {
            let Some(&c) = self.json.get(self.index) else {
                return Err(self.error(ErrorKind::MalformedString));
            };
            self.index += 1;

            match c {
                b'"' => break,
                b'\\' => {
                    let Some(&escape) = self.json.get(self.index) else {
                        return Err(self.error(ErrorKind::MalformedString));
                    };
                    self.index += 1;
                    match escape {
                        b'"' => self.scratch.push('"'),
                        b'\\' => self.scratch.push('\\'),
                        b'/' => self.scratch.push('/'),
                        b'b' => self.scratch.push('\u{0008}'),
                        b'f' => self.scratch.push('\u{000C}'),
                        b'n' => self.scratch.push('\n'),
                        b'r' => self.scratch.push('\r'),
                        b't' => self.scratch.push('\t'),
                        b'u' => {
                            // The four hex digits are consumed but never
                            // decoded; nothing reaches the output.
                            if self.json.len() - self.index >= 4 {
                                self.index += 4;
                            } else {
                                return Err(self.error(ErrorKind::MalformedString));
                            }
                        }
                        _ => {}
                    }
                }
                c => self.scratch.push(char::from(c)),
            }
        }

        Ok(self.strings.intern(&self.scratch))
    }

    /// Parses the numeric literal at the cursor as an interned `f32`.
    pub(crate) fn parse_float(&mut self) -> Arc<f32> {
        let value = match self.zero_or_one() {
            Some(v) => v as f32,
            None => numbers::atof(self.json, &mut self.index) as f32,
        };
        self.floats.intern(value)
    }

    /// Parses the numeric literal at the cursor as an `f64`.
    pub(crate) fn parse_double(&mut self) -> f64 {
        if let Some(v) = self.zero_or_one() {
            return v;
        }
        numbers::atof(self.json, &mut self.index)
    }

    /// Compact numeric lists are dominated by `0,` and `1,`; both resolve
    /// with a two-byte lookahead, consuming the digit and the comma. Any
    /// other continuation (`10`, `0.5`) falls through to the full parser.
    fn zero_or_one(&mut self) -> Option<f64> {
        let value = match self.json.get(self.index..self.index + 2)? {
            b"0," => 0.0,
            b"1," => 1.0,
            _ => return None,
        };
        self.index += 2;
        Some(value)
    }

    /// Estimates how many members or elements the container at the cursor
    /// holds by counting commas at the opener's own nesting depth. Only a
    /// sizing hint: malformed input yields a harmless misestimate, never a
    /// panic.
    pub(crate) fn estimate_len(&self) -> usize {
        let mut depth = 0i32;
        let mut count = 1;

        for &c in self.json.iter().skip(self.index + 1) {
            match c {
                b'{' | b'[' => depth += 1,
                b'}' | b']' => depth -= 1,
                b',' if depth == 0 => count += 1,
                _ => {}
            }
            if depth < 0 {
                break;
            }
        }

        count
    }

    /// Advances past an entire object or array without materializing it:
    /// finds the first opening brace or bracket, then depth-tracks to one
    /// byte past the matching close.
    pub(crate) fn skip_value(&mut self) {
        let mut depth = 0i32;

        while let Some(&c) = self.json.get(self.index) {
            self.index += 1;
            if c == b'{' || c == b'[' {
                depth = 1;
                break;
            }
        }

        while let Some(&c) = self.json.get(self.index) {
            match c {
                b'{' | b'[' => depth += 1,
                b'}' | b']' => depth -= 1,
                _ => {}
            }
            self.index += 1;
            if depth <= 0 {
                break;
            }
        }
    }
}

#[cfg(test)]
impl Scanner<'_> {
    pub(crate) fn position(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_classifies_and_consumes_one_byte() {
        let mut s = Scanner::new(b"{}[],:");
        assert_eq!(s.next_token(), Token::ObjectOpen);
        assert_eq!(s.next_token(), Token::ObjectClose);
        assert_eq!(s.next_token(), Token::ArrayOpen);
        assert_eq!(s.next_token(), Token::ArrayClose);
        assert_eq!(s.next_token(), Token::Comma);
        assert_eq!(s.next_token(), Token::Colon);
        assert_eq!(s.next_token(), Token::None);
    }

    #[test]
    fn literal_keywords_consume_in_full() {
        let mut s = Scanner::new(b" true false null");
        assert_eq!(s.next_token(), Token::True);
        assert_eq!(s.next_token(), Token::False);
        assert_eq!(s.next_token(), Token::Null);
        assert_eq!(s.position(), 16);
    }

    #[test]
    fn truncated_literals_classify_as_none() {
        let mut s = Scanner::new(b"tru");
        assert_eq!(s.next_token(), Token::None);
        let mut s = Scanner::new(b"nul");
        assert_eq!(s.lookahead(), Token::None);
    }

    #[test]
    fn lookahead_is_idempotent() {
        let mut s = Scanner::new(b"  \"walk\"");
        assert_eq!(s.lookahead(), Token::String);
        assert_eq!(s.lookahead(), Token::String);
        let at = s.position();
        assert_eq!(s.lookahead(), Token::String);
        assert_eq!(s.position(), at);
    }

    #[test]
    fn strings_and_numbers_classify_by_leading_byte() {
        for doc in [&b"\"x\""[..], b"-1.5", b"9"] {
            let mut s = Scanner::new(doc);
            let token = s.lookahead();
            assert!(matches!(token, Token::String | Token::Number), "{doc:?}");
            assert_eq!(s.position(), 0);
        }
    }

    #[test]
    fn newlines_advance_the_line_counter() {
        let mut s = Scanner::new(b"\n\n  \n true");
        assert_eq!(s.next_token(), Token::True);
        assert_eq!(s.line(), 4);
    }

    #[test]
    fn hot_keys_and_the_scan_loop_agree() {
        for key in keys::HOT_KEYS {
            let doc = format!("\"{key}\":");
            let mut fast = Scanner::new(doc.as_bytes());
            let via_fast = fast.parse_string().unwrap();
            let mut slow = Scanner::new(doc.as_bytes());
            let via_slow = slow.parse_string_slow().unwrap();
            assert_eq!(&*via_fast, key);
            assert_eq!(via_fast, via_slow);
            assert_eq!(fast.position(), slow.position());
        }
    }

    #[test]
    fn hot_key_content_reached_through_escapes_stays_canonical() {
        // `"time\u0041"` misses the fast path but still decodes to
        // "time" because the escape is consumed without output.
        let mut s = Scanner::new(br#""time\u0041" "time""#);
        let slow = s.parse_string().unwrap();
        let fast = s.parse_string().unwrap();
        assert_eq!(&*slow, "time");
        assert!(Arc::ptr_eq(&slow, &fast));
    }

    #[test]
    fn escapes_translate_and_unknown_escapes_drop() {
        let mut s = Scanner::new(br#""a\n\t\"\\\/\b\f\r\qz""#);
        let parsed = s.parse_string().unwrap();
        assert_eq!(&*parsed, "a\n\t\"\\/\u{0008}\u{000C}\rz");
    }

    #[test]
    fn unterminated_strings_error_instead_of_running_off_the_buffer() {
        for doc in [&b"\"abc"[..], b"\"abc\\", b"\"abc\\u00"] {
            let mut s = Scanner::new(doc);
            let err = s.parse_string().unwrap_err();
            assert_eq!(err.kind, ErrorKind::MalformedString);
        }
    }

    #[test]
    fn repeated_strings_share_one_allocation() {
        let mut s = Scanner::new(br#""swing" "swing""#);
        let first = s.parse_string().unwrap();
        let second = s.parse_string().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn zero_and_one_fast_paths_consume_digit_and_comma() {
        let mut s = Scanner::new(b"0,1,10,");
        assert_eq!(s.parse_double(), 0.0);
        assert_eq!(s.position(), 2);
        assert_eq!(s.parse_double(), 1.0);
        assert_eq!(s.position(), 4);
        assert_eq!(s.parse_double(), 10.0);
        assert_eq!(s.position(), 6); // the comma stays for the token loop
    }

    #[test]
    fn zero_point_five_is_not_mistaken_for_the_fast_path() {
        let mut s = Scanner::new(b"0.5,");
        assert_eq!(s.parse_double(), 0.5);
        assert_eq!(s.position(), 3);
    }

    #[test]
    fn float_fast_path_and_atof_share_the_interning_cache() {
        let mut s = Scanner::new(b"1,1.0,");
        let via_fast_path = s.parse_float();
        assert_eq!(s.position(), 2);
        let via_atof = s.parse_float();
        assert!(Arc::ptr_eq(&via_fast_path, &via_atof));
        assert_eq!(*via_atof, 1.0);
    }

    #[test]
    fn estimate_ignores_nested_commas() {
        let s = Scanner::new(br#"{"a":[1,2,{"b":3}],"c":4}"#);
        assert_eq!(s.estimate_len(), 2);
    }

    #[test]
    fn estimate_counts_array_elements() {
        let s = Scanner::new(b"[1,2,3]");
        assert_eq!(s.estimate_len(), 3);
        let s = Scanner::new(b"[]");
        assert_eq!(s.estimate_len(), 1); // overestimate, sizing hint only
    }

    #[test]
    fn estimate_survives_malformed_input() {
        let s = Scanner::new(b"[1,2");
        assert_eq!(s.estimate_len(), 2);
        let s = Scanner::new(b"[");
        assert_eq!(s.estimate_len(), 1);
    }

    #[test]
    fn skip_value_stops_one_past_the_matching_close() {
        let doc = br#"{"a":{"b":1},"c":2}"#;
        let mut s = Scanner::new(doc);
        s.skip_value();
        assert_eq!(s.position(), doc.len());
    }

    #[test]
    fn skip_value_handles_arrays_and_trailing_input() {
        let doc = br#"["x",[1,2],3],"tail""#;
        let mut s = Scanner::new(doc);
        s.skip_value();
        assert_eq!(s.position(), 13);
    }

    #[test]
    fn reset_restores_a_fresh_session() {
        let mut s = Scanner::new(b"\n\"lunge\"");
        let first = s.parse_string().unwrap();
        assert_eq!(s.line(), 2);
        s.reset();
        assert_eq!(s.line(), 1);
        let second = s.parse_string().unwrap();
        assert_eq!(first, second);
        assert!(!Arc::ptr_eq(&first, &second)); // caches are per session
    }
}
