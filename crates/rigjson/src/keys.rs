//! Fast-path recognition of high-frequency key names.
//!
//! Skeleton and animation documents repeat a small set of member names
//! thousands of times. `Scanner::parse_string` resolves these through the
//! table below without entering the escape scan loop.

/// The fixed hot-key set. The scanner holds one canonical `Arc<str>` per
/// entry for the duration of a decode session.
pub(crate) const HOT_KEYS: [&str; 16] = [
    "time",
    "name",
    "hull",
    "type",
    "width",
    "height",
    "curve",
    "angle",
    "rotate",
    "scale",
    "translate",
    "stepped",
    "attachment",
    "x",
    "y",
    "z",
];

/// Indices into [`HOT_KEYS`], grouped by leading byte so a lookup probes at
/// most three candidates. Within a group the most frequent name comes first.
fn candidates(first: u8) -> &'static [u8] {
    match first {
        b'a' => &[7, 12],
        b'c' => &[6],
        b'h' => &[2, 5],
        b'n' => &[1],
        b'r' => &[8],
        b's' => &[9, 11],
        b't' => &[0, 3, 10],
        b'w' => &[4],
        b'x' => &[13],
        b'y' => &[14],
        b'z' => &[15],
        _ => &[],
    }
}

/// Matches the bytes just past an opening quote against the hot-key table.
/// A literal only counts when the closing quote follows it immediately.
pub(crate) fn match_hot_key(bytes: &[u8]) -> Option<usize> {
    let &first = bytes.first()?;
    for &id in candidates(first) {
        let literal = HOT_KEYS[id as usize].as_bytes();
        if bytes.len() > literal.len()
            && &bytes[..literal.len()] == literal
            && bytes[literal.len()] == b'"'
        {
            return Some(id as usize);
        }
    }
    None
}
