//! Small shared helpers.

/// Truncates a string to at most `max_len` bytes without splitting a
/// character. `String::truncate` panics when the cut lands inside a
/// multibyte character, and both CTFtime titles and challenge names are
/// routinely non-ASCII.
pub fn truncate_to_char_boundary(s: &mut String, max_len: usize) {
    if s.len() <= max_len {
        return;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}
