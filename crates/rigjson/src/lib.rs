//! An allocation-conscious decoder for JSON skeleton and animation
//! documents.
//!
//! The decoder pairs a hand-built byte scanner with two session-scoped
//! interning caches, so repeated member names and repeated single-precision
//! values share one allocation across a decode. Container sizes are
//! estimated by lookahead before construction, and the highest-frequency
//! key names resolve through a fixed fast-path table without entering the
//! string scan loop.
//!
//! Decoding is strict and fail-fast: the first invalid condition anywhere
//! in the buffer aborts the decode with a line-numbered error, and no
//! partial tree is returned.
//!
//! # Examples
//!
//! ```rust
//! use rigjson::{DecoderOptions, JsonDecoder, NumberWidth};
//!
//! let decoder = JsonDecoder::new(DecoderOptions {
//!     numbers: NumberWidth::Single,
//!     ..DecoderOptions::default()
//! });
//! let doc = decoder
//!     .decode(r#"{"bones":[{"name":"root","x":1,"y":0}]}"#)
//!     .unwrap();
//! let bones = doc.as_object().unwrap()["bones"].as_array().unwrap();
//! assert_eq!(bones[0].as_object().unwrap()["x"].as_number(), Some(1.0));
//! ```
//!
//! A known limitation: `\u` escape sequences are consumed (four hex
//! digits) but never decoded into a character.

mod decoder;
mod error;
mod intern;
mod keys;
mod numbers;
mod options;
mod scanner;
mod value;

pub use decoder::{JsonDecoder, deserialize};
pub use error::{DecodeError, ErrorKind};
pub use options::{DecoderOptions, NumberWidth};
pub use value::{Array, Map, Value};
