use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::info;
use transcript::Transcript;
use utoipa::OpenApi;

use crate::capabilities::Capabilities;

pub mod capabilities;
pub mod healthz;
pub mod home;
pub mod language;
pub mod message;
pub mod not_found;
mod response;

pub use response::{ApiResponse, IntoApiResponse};

#[derive(Debug, PartialEq)]
pub enum ApiError {
    ClientError(String),
    UpstreamError(String),
    ServerError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    transcript: Transcript,
    capabilities: Capabilities,
    config: Config,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub server: Server,
    pub summary: SummaryPolicy,
    pub workers_ai: WorkersAi,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    pub port: u16,
    pub allowed_origin: String,
}

/// The gate for offering a summary action on a message. The thresholds are
/// product policy, kept in Config.toml rather than hard-coded.
#[derive(Clone, Debug, Deserialize)]
pub struct SummaryPolicy {
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
    #[serde(default = "default_language")]
    pub language: String,
}

impl SummaryPolicy {
    pub fn offers_summary(&self, text: &str, detected_language: &str) -> bool {
        text.chars().count() > self.min_chars
            && detected_language == self.language
    }
}

fn default_min_chars() -> usize {
    150
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct WorkersAi {
    pub base_url: String,
    pub language_detection: bool,
    pub summarization: bool,
    pub translation: bool,
}

pub async fn serve(
    transcript: Transcript,
    capabilities: Capabilities,
    config: Config,
) -> anyhow::Result<Router> {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            healthz::get_health,
            language::get_languages,
            message::post_message,
            message::get_messages,
            message::get_message,
            message::post_summary,
            message::post_translation,
        ),
        components(schemas(
            message::request::PostMessageRequest,
            message::request::PostTranslationRequest,
            message::response::MessageResp,
            message::response::TranslationResp,
            message::response::GetMessagesResp,
            language::response::LanguageResp,
            language::response::GetLanguagesResp,
        ))
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    let origins: [axum::http::HeaderValue; 1] =
        [config.server.allowed_origin.parse()?];

    let state = ApiState {
        transcript,
        capabilities,
        config,
    };

    // messages
    let message_router = Router::new()
        .route(
            "/",
            get(message::get_messages).post(message::post_message),
        )
        .route("/:id", get(message::get_message))
        .route("/:id/summary", post(message::post_summary))
        .route("/:id/translations", post(message::post_translation))
        .fallback(not_found::get_404)
        .with_state(state);

    // translation targets
    let language_router = Router::new()
        .route("/", get(language::get_languages))
        .fallback(not_found::get_404);

    let router = Router::new()
        .route("/", get(home::get_home))
        .route("/healthz", get(healthz::get_health))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest("/messages", message_router)
        .nest("/languages", language_router)
        .layer(CorsLayer::new().allow_origin(origins))
        .fallback(not_found::get_404);

    Ok(router)
}
