//! Placeholder token construction and caret-position splicing.
//!
//! A chosen CSV column lands in the template as `{column}`, the token the
//! sending side later formats with each recipient's row. The splice works on
//! the caret offset the browser reports at the moment the column is picked,
//! leaves the surrounding text untouched, and hands back the offset the caret
//! should be parked at afterwards.

use super::helpers::{byte_to_utf16_idx, utf16_to_byte_idx};

/// Wraps a CSV column name in the token the sender substitutes per recipient.
/// The name goes in verbatim, braces and all.
pub fn field_token(header: &str) -> String {
    format!("{{{}}}", header)
}

/// Splices `{header}` into `text` at the caret reported by the browser.
///
/// `caret_utf16` is a UTF-16 code unit offset as reported by
/// `selectionStart`, clamped to the end of `text` when it points past it.
/// Returns the new text and the UTF-16 offset immediately after the inserted
/// token.
pub fn splice_at_caret(text: &str, caret_utf16: u32, header: &str) -> (String, u32) {
    let token = field_token(header);
    let byte_pos = utf16_to_byte_idx(text, caret_utf16 as usize);

    let mut spliced = text.to_string();
    spliced.insert_str(byte_pos, &token);

    let caret_after = byte_to_utf16_idx(&spliced, byte_pos + token.len());
    (spliced, caret_after)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splices_at_caret_and_advances_it() {
        let (text, caret) = splice_at_caret("Hi , welcome", 3, "name");
        assert_eq!(text, "Hi {name}, welcome");
        assert_eq!(caret, 9);
    }

    #[test]
    fn inserts_into_empty_text() {
        let (text, caret) = splice_at_caret("", 0, "phone");
        assert_eq!(text, "{phone}");
        assert_eq!(caret, 7);
    }

    #[test]
    fn caret_past_the_end_clamps_to_the_end() {
        let (text, caret) = splice_at_caret("Hi", 99, "name");
        assert_eq!(text, "Hi{name}");
        assert_eq!(caret, 8);
    }

    #[test]
    fn multibyte_prefix_keeps_utf16_offsets_honest() {
        // "né" is two UTF-16 units but three UTF-8 bytes.
        let (text, caret) = splice_at_caret("né!", 2, "x");
        assert_eq!(text, "né{x}!");
        assert_eq!(caret, 5);
    }

    #[test]
    fn supplementary_plane_prefix_counts_two_units() {
        let (text, caret) = splice_at_caret("😀ab", 2, "f");
        assert_eq!(text, "😀{f}ab");
        assert_eq!(caret, 5);
    }

    #[test]
    fn header_name_is_not_escaped() {
        assert_eq!(field_token("name"), "{name}");
        assert_eq!(field_token("a{b"), "{a{b}");
    }
}
