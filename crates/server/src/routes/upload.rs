use actix_multipart::Multipart;
use actix_web::{post, HttpResponse};
use condense_common::CondenseError;
use futures::StreamExt;

use crate::error::ApiError;
use crate::types::UploadResponse;

/// Decode an uploaded text file and return its content with basic stats.
/// Nothing is written to disk.
#[post("/upload")]
pub async fn upload(mut payload: Multipart) -> Result<HttpResponse, ApiError> {
    let mut filename = None;
    let mut data: Vec<u8> = Vec::new();

    while let Some(field) = payload.next().await {
        let mut field = field
            .map_err(|e| CondenseError::invalid_input(format!("Malformed upload: {}", e)))?;

        let content_disposition = field.content_disposition();
        if content_disposition.get_name() != Some("file") {
            continue;
        }

        filename = Some(
            content_disposition
                .get_filename()
                .unwrap_or("unknown")
                .to_string(),
        );

        while let Some(chunk) = field.next().await {
            let bytes = chunk
                .map_err(|e| CondenseError::invalid_input(format!("Failed to read upload: {}", e)))?;
            data.extend_from_slice(&bytes);
        }
    }

    let filename = filename
        .ok_or_else(|| CondenseError::invalid_input("No file uploaded"))?;

    let text = String::from_utf8(data)
        .map_err(|_| CondenseError::invalid_input("File is not valid UTF-8 text"))?;

    let chars = text.chars().count();
    let words = text.split_whitespace().count();

    Ok(HttpResponse::Ok().json(UploadResponse {
        filename,
        chars,
        words,
        text,
    }))
}
