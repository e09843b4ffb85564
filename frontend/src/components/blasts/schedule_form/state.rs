//! Component state for the blast scheduling form.
//!
//! This module defines the state struct holding the form's runtime data (the
//! mirrored template text, the preview state machine, and the request
//! counter) together with `FormControls`, the explicit handle on the four
//! form controls. Everything that reads the live DOM goes through
//! `FormControls`; the rest of the form logic works on plain values.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::preview::PreviewState;
use super::validate::FormSnapshot;

/// References to the four controls the form logic touches, constructed once
/// with the component and cloned into event closures. Replaces document-wide
/// element lookup so the controls a handler reads are always the ones this
/// component rendered.
#[derive(Clone, Default, PartialEq)]
pub struct FormControls {
    /// `<input type="file">` carrying the contact list.
    pub csv_file: NodeRef,
    /// `<textarea>` holding the message template.
    pub template: NodeRef,
    /// `<input type="datetime-local">` with the send time.
    pub scheduled_time: NodeRef,
    /// `<select>` offering the CSV column names.
    pub field_picker: NodeRef,
}

impl FormControls {
    /// Reads the live control values into a plain snapshot. Called from the
    /// submit handler so every validation run sees the values as they are at
    /// that moment, never a cached copy.
    ///
    /// A scheduled-time value that does not parse as a date becomes `None`,
    /// which the rules reject rather than let through.
    pub fn snapshot(&self) -> FormSnapshot {
        let file_name = self
            .csv_file
            .cast::<HtmlInputElement>()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| file.name());

        let template = self
            .template
            .cast::<HtmlTextAreaElement>()
            .map(|area| area.value())
            .unwrap_or_default();

        let scheduled_ms = self
            .scheduled_time
            .cast::<HtmlInputElement>()
            .map(|input| js_sys::Date::parse(&input.value()))
            .filter(|ms| !ms.is_nan());

        FormSnapshot {
            file_name,
            template,
            scheduled_ms,
        }
    }
}

/// Main state container for the `ScheduleBlastForm` component.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct ScheduleBlastForm {
    /// Current content of the template textarea (UTF-8 `String`).
    pub text: String,

    /// Handles on the four form controls.
    pub controls: FormControls,

    /// Where the CSV header preview flow currently stands.
    pub preview: PreviewState,

    /// Sequence number handed to the next preview request. Resolutions
    /// carrying an older number are discarded as stale.
    pub next_seq: u64,
}

impl ScheduleBlastForm {
    /// Constructs the initial state: empty template, fresh control handles,
    /// preview idle (field picker disabled), sequence counter at zero.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            controls: FormControls::default(),
            preview: PreviewState::Idle,
            next_seq: 0,
        }
    }
}
