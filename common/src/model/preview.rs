use serde::{Deserialize, Serialize};

/// Response body of the CSV header preview endpoint (`POST /preview_csv`).
///
/// When the user picks a contact list in the scheduling form, the frontend
/// uploads it and the backend answers with exactly one of two shapes:
/// `{"headers": [...]}` carrying the column names of the first CSV record in
/// file order, or `{"error": "..."}` describing why no headers could be read.
///
/// The enum is untagged so it serializes to those bare objects and so the
/// frontend can decode whichever shape arrives without inspecting the HTTP
/// status first. A body matching neither variant is treated by the frontend
/// as a transport failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CsvPreview {
    /// Column names of the uploaded file, in file order.
    Headers { headers: Vec<String> },
    /// Operator-visible reason the preview failed. Never shown to the user.
    Error { error: String },
}
