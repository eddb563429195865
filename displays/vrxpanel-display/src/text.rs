//! Fixed-capacity text helpers

use heapless::String;

/// Copy `text` into a `String<N>`, dropping whatever does not fit
///
/// Truncates on a char boundary, so a multi-byte glyph is either copied
/// whole or not at all.
pub fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
