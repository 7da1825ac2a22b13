/// Width selection for decoded numeric literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberWidth {
    /// Decode to `f32` and intern, so equal values within one decode share a
    /// single allocation. Skeleton documents are loaded at this width.
    Single,
    /// Decode to `f64`, stored inline. No value interning beyond the
    /// `0,`/`1,` literal fast path.
    #[default]
    Double,
}

/// Configuration for [`JsonDecoder`](crate::JsonDecoder).
///
/// # Examples
///
/// ```rust
/// use rigjson::{DecoderOptions, NumberWidth};
///
/// let options = DecoderOptions {
///     numbers: NumberWidth::Single,
///     ..DecoderOptions::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderOptions {
    /// Width of decoded numbers.
    ///
    /// # Default
    ///
    /// [`NumberWidth::Double`]
    pub numbers: NumberWidth,

    /// Member name prefixes to discard while decoding objects.
    ///
    /// Editor exports can carry scratch entries (work-in-progress
    /// animations, debug attachments) that only waste memory at runtime.
    /// A member whose name starts with any listed prefix is dropped:
    /// object and array values are skipped without being materialized,
    /// scalar values are parsed and discarded.
    ///
    /// # Default
    ///
    /// Empty: every member is kept.
    pub skip_member_prefixes: &'static [&'static str],
}
