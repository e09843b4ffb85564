//! Update function for the blast scheduling form.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `ScheduleBlastForm` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Mirroring textarea edits into component state.
//! - Driving the header preview: one multipart upload per file selection,
//!   resolutions matched against the pending sequence number, stale ones
//!   discarded.
//! - Splicing the chosen column token into the template at the caret and
//!   parking the caret right after it.
//!
//! Preview failures never reach the user; they go to the console and the
//! picker keeps whatever list it had.

use gloo_console::{error, warn};
use gloo_net::http::Request;
use web_sys::{File, FormData, HtmlTextAreaElement};
use yew::prelude::*;

use common::model::preview::CsvPreview;

use super::messages::Msg;
use super::placeholder::splice_at_caret;
use super::state::ScheduleBlastForm;

/// Endpoint answering the header preview upload.
const PREVIEW_ENDPOINT: &str = "/preview_csv";

/// Multipart field name the endpoint expects the file under.
const PREVIEW_FIELD: &str = "csv_file";

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (async completions).
/// - Returns `true` to re-render the view, `false` when only side effects
///   occurred.
pub fn update(
    component: &mut ScheduleBlastForm,
    ctx: &Context<ScheduleBlastForm>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::TemplateEdited(text) => {
            component.text = text;
            true
        }
        Msg::FileSelected(file) => {
            let seq = component.next_seq;
            component.next_seq += 1;
            component.preview.begin(seq);

            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = request_headers(file).await;
                link.send_message(Msg::PreviewResolved { seq, outcome });
            });
            false
        }
        Msg::PreviewResolved { seq, outcome } => match outcome {
            Ok(CsvPreview::Headers { headers }) => {
                if !component.preview.succeed(seq, headers) {
                    warn!("CSV preview: discarded superseded response");
                    return false;
                }
                true
            }
            Ok(CsvPreview::Error { error }) => {
                error!("CSV preview rejected:", error);
                if !component.preview.fail(seq) {
                    warn!("CSV preview: discarded superseded response");
                }
                false
            }
            Err(message) => {
                error!("CSV preview request failed:", message);
                if !component.preview.fail(seq) {
                    warn!("CSV preview: discarded superseded response");
                }
                false
            }
        },
        Msg::FieldChosen(header) => {
            // The empty value is the fixed "Select a field" option.
            if header.is_empty() {
                return false;
            }
            let Some(textarea) = component.controls.template.cast::<HtmlTextAreaElement>()
            else {
                return false;
            };

            let caret = textarea.selection_start().unwrap_or(Some(0)).unwrap_or(0);
            let (text, caret_after) = splice_at_caret(&textarea.value(), caret, &header);

            component.text = text;
            textarea.set_value(&component.text);
            textarea.focus().ok();

            // Park the caret after the token once the browser has settled.
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(10).await;
                textarea.set_selection_range(caret_after, caret_after).ok();
            });
            true
        }
    }
}

/// Uploads `file` as the sole field of a multipart request and decodes the
/// response. `Err` carries transport-level failures (network error, body that
/// decodes as neither shape); server-side rejections come back as
/// `Ok(CsvPreview::Error { .. })`.
async fn request_headers(file: File) -> Result<CsvPreview, String> {
    let form = FormData::new().map_err(|_| "FormData is unavailable".to_string())?;
    form.append_with_blob_and_filename(PREVIEW_FIELD, &file, &file.name())
        .map_err(|_| "could not attach the file".to_string())?;

    let response = Request::post(PREVIEW_ENDPOINT)
        .body(form)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;

    response
        .json::<CsvPreview>()
        .await
        .map_err(|err| err.to_string())
}
