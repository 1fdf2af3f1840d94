use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{post, web, HttpResponse};

use crate::types::DownloadRequest;

/// Return the posted summary as a plain-text file attachment
#[post("/download")]
pub async fn download(req: web::Json<DownloadRequest>) -> HttpResponse {
    let req = req.into_inner();
    let filename = req
        .filename
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "summary.txt".to_string());

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .body(req.summary)
}
