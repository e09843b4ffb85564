//! CSV header preview for the blast scheduling form.
//!
//! The page uploads the chosen contact list here before the form is ever
//! submitted, so the author can pick real column names while composing the
//! message template. The provided route is:
//!
//! - `POST /preview_csv`: multipart/form-data with a single `csv_file` field
//!   carrying the raw file. Answers `{"headers": [...]}` with the column
//!   names of the first record, or `{"error": "..."}` with status 400 when
//!   the field is missing or no header row can be read.

use actix_web::web::{post, scope};
use actix_web::Scope;

mod headers;

const API_PATH: &str = "/preview_csv";

/// Configures and returns the Actix scope for the preview route.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(headers::process))
}
