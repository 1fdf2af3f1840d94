//! Condense HTTP Server
//!
//! Actix-web REST API in front of the map-reduce summarizer

mod error;
mod routes;
mod state;
mod types;

pub use error::ApiError;
pub use state::AppState;
pub use types::compression_ratio;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use condense_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Maximum accepted JSON payload
const JSON_PAYLOAD_LIMIT: usize = 10 * 1024 * 1024;

/// Start the HTTP server with the given configuration
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_address = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(Arc::clone(&state)))
            .app_data(web::JsonConfig::default().limit(JSON_PAYLOAD_LIMIT))
            .service(routes::summarize::summarize)
            .service(routes::upload::upload)
            .service(routes::download::download)
            .service(routes::system::health)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use condense_common::config::{
        DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_SHORT_THRESHOLD,
    };
    use condense_llm::{CompletionBackend, SummarizeOptions, Summarizer};
    use std::path::PathBuf;

    struct FixedBackend;

    #[async_trait]
    impl CompletionBackend for FixedBackend {
        async fn complete(&self, _prompt: &str) -> condense_common::Result<String> {
            Ok("a fixed summary".to_string())
        }
    }

    fn test_state() -> Arc<AppState> {
        let config = AppConfig {
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            base_url: "https://api.example.com/v1".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
            short_threshold: DEFAULT_SHORT_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        };
        let summarizer = Summarizer::new(Arc::new(FixedBackend), SummarizeOptions::from(&config));

        Arc::new(AppState {
            config,
            summarizer: Arc::new(summarizer),
        })
    }

    #[actix_web::test]
    async fn test_health_route() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(routes::system::health),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "test-model");
    }

    #[actix_web::test]
    async fn test_summarize_route() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(routes::summarize::summarize),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/summarize")
            .set_json(serde_json::json!({
                "text": "Some text that deserves a much shorter rendition.",
                "mode": "standard"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["summary"], "a fixed summary");
        assert_eq!(body["mode"], "standard");
        assert!(body["compression"].is_number());
    }

    #[actix_web::test]
    async fn test_summarize_empty_text_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(routes::summarize::summarize),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/summarize")
            .set_json(serde_json::json!({"text": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_download_route() {
        let app = test::init_service(App::new().service(routes::download::download)).await;

        let req = test::TestRequest::post()
            .uri("/download")
            .set_json(serde_json::json!({"summary": "the summary body"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let disposition = resp
            .headers()
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("attachment"));
        assert!(disposition.contains("summary.txt"));

        let body = test::read_body(resp).await;
        assert_eq!(body, "the summary body");
    }
}
