//! Utility functions for the blast scheduling form.
//!
//! Browser text controls report and accept positions in UTF-16 code units
//! while Rust strings are UTF-8, so every caret exchanged with the textarea
//! goes through the index conversions here. `show_alert` is the form's one
//! user-facing notification surface.

/// Converts a UTF-8 byte index into `s` to the equivalent UTF-16 code unit
/// index, suitable for `set_selection_range`. `byte_idx` must lie on a char
/// boundary.
pub fn byte_to_utf16_idx(s: &str, byte_idx: usize) -> u32 {
    s[..byte_idx].encode_utf16().count() as u32
}

/// Converts a UTF-16 code unit index reported by a browser control
/// (`selectionStart`) to a UTF-8 byte index usable for slicing. Indices past
/// the end of `s`, or landing inside a surrogate pair, clamp forward to the
/// next boundary.
pub fn utf16_to_byte_idx(s: &str, utf16_idx: usize) -> usize {
    let mut units = 0;
    for (byte_idx, ch) in s.char_indices() {
        if units >= utf16_idx {
            return byte_idx;
        }
        units += ch.len_utf16();
    }
    s.len()
}

/// Shows one blocking alert. The submit guard calls this once per failed
/// rule.
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
