use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder};
use common::model::preview::CsvPreview;
use futures_util::StreamExt;
use log::debug;

/// Multipart field name carrying the uploaded contact list.
const FILE_FIELD: &str = "csv_file";

/// HTTP handler wrapper that converts the internal result to an
/// `HttpResponse`.
///
/// - On success: `200 OK` with a `headers` JSON body.
/// - On failure: `400 Bad Request` with an `error` JSON body.
pub async fn process(payload: Multipart) -> impl Responder {
    match preview_headers(payload).await {
        Ok(headers) => HttpResponse::Ok().json(CsvPreview::Headers { headers }),
        Err(e) => HttpResponse::BadRequest().json(CsvPreview::Error {
            error: e.to_string(),
        }),
    }
}

/// Walks the multipart payload, collects the `csv_file` field, and reads its
/// header record. Other fields are skipped.
async fn preview_headers(
    mut payload: Multipart,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if name.as_deref() != Some(FILE_FIELD) {
            continue;
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk?);
        }
        debug!("previewing CSV headers from {} uploaded bytes", bytes.len());

        return headers_from_bytes(&bytes);
    }

    Err("No CSV file provided".into())
}

/// Reads the first record of `bytes` as the header row.
fn headers_from_bytes(bytes: &[u8]) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_reader(bytes);
    let record = reader.headers()?.clone();
    if record.is_empty() {
        return Err("CSV file has no header row".into());
    }
    Ok(record.iter().map(|cell| cell.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::headers_from_bytes;
    use common::model::preview::CsvPreview;

    #[test]
    fn reads_header_row_in_file_order() {
        let headers = headers_from_bytes(b"name,phone\nAda,555-0100\n").unwrap();
        assert_eq!(headers, vec!["name", "phone"]);
    }

    #[test]
    fn handles_quoted_cells_and_crlf() {
        let headers = headers_from_bytes(b"\"full name\",phone_number\r\nAda,555\r\n").unwrap();
        assert_eq!(headers, vec!["full name", "phone_number"]);
    }

    #[test]
    fn header_only_file_is_enough() {
        let headers = headers_from_bytes(b"email\n").unwrap();
        assert_eq!(headers, vec!["email"]);
    }

    #[test]
    fn empty_file_is_an_error() {
        assert!(headers_from_bytes(b"").is_err());
    }

    #[test]
    fn response_bodies_match_the_page_contract() {
        let ok = CsvPreview::Headers {
            headers: vec!["name".to_string(), "phone".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({"headers": ["name", "phone"]})
        );

        let failed = CsvPreview::Error {
            error: "No CSV file provided".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({"error": "No CSV file provided"})
        );
    }
}
