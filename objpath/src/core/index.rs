//! Sequence index recognition.

/// Parse `segment` as a sequence position.
///
/// Only canonical non-negative integers qualify: ASCII digits without a sign
/// and without leading zeros (`"0"` is allowed, `"01"` is not). Anything else,
/// including values that overflow `usize`, is a plain key.
pub fn parse_index(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    segment.parse().ok()
}
