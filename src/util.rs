//! Character-offset helpers shared by the guard and the field buffer

/// Convert a char offset to a byte offset, clamping to the end of `text`
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Number of chars in `text`
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
