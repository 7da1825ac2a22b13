//! ASCII-to-float conversion without locale or allocation overhead.

/// Converts the numeric literal starting at `json[*index]` to an `f64`,
/// advancing `index` past every byte that continues the numeric grammar: an
/// optional leading `-`, integer digits, an optional `.` fraction, and an
/// optional `e`/`E` exponent with sign.
///
/// The cursor is left on the first byte that cannot extend the literal; the
/// caller treats that byte as the start of the next token. A bare exponent
/// marker with no digits behind it is not part of the literal.
pub(crate) fn atof(json: &[u8], index: &mut usize) -> f64 {
    let mut i = *index;

    let negative = json.get(i) == Some(&b'-');
    if negative {
        i += 1;
    }

    let mut mantissa = 0.0f64;
    while let Some(d) = digit(json, i) {
        mantissa = mantissa * 10.0 + f64::from(d);
        i += 1;
    }

    let mut scale = 0i32;
    if json.get(i) == Some(&b'.') {
        i += 1;
        while let Some(d) = digit(json, i) {
            mantissa = mantissa * 10.0 + f64::from(d);
            scale -= 1;
            i += 1;
        }
    }

    if matches!(json.get(i), Some(&(b'e' | b'E'))) {
        let mut j = i + 1;
        let exponent_negative = match json.get(j) {
            Some(b'-') => {
                j += 1;
                true
            }
            Some(b'+') => {
                j += 1;
                false
            }
            _ => false,
        };
        if digit(json, j).is_some() {
            let mut exponent = 0i32;
            while let Some(d) = digit(json, j) {
                exponent = exponent.saturating_mul(10).saturating_add(i32::from(d));
                j += 1;
            }
            scale += if exponent_negative { -exponent } else { exponent };
            i = j;
        }
    }

    *index = i;

    let magnitude = mantissa * 10f64.powi(scale);
    if negative { -magnitude } else { magnitude }
}

fn digit(json: &[u8], i: usize) -> Option<u8> {
    match json.get(i) {
        Some(&c) if c.is_ascii_digit() => Some(c - b'0'),
        _ => None,
    }
}
