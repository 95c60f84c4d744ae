use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::pipeline;

/// What callers see when both retrieval paths are exhausted. The precise
/// cause only goes to the log.
const UNAVAILABLE_HINT: &str = "Transcript could not be retrieved. Possible reasons: subtitles are disabled, the video is private, or a CAPTCHA was triggered. Try a different video.";

#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TranscriptRequest {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Serialize)]
struct TranscriptResponse {
    transcript: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/transcript", post(post_transcript))
        .with_state(state)
}

async fn post_transcript(
    State(state): State<AppState>,
    Json(req): Json<TranscriptRequest>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let url = match req.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        // The pipeline is never invoked without a URL
        _ => return Err(ApiError::bad_request("Missing URL")),
    };
    info!("Received /transcript request for {url}");

    match pipeline::get_transcript(&state.client, &state.config, &url).await {
        Ok(transcript) => {
            info!("Transcript extracted for {url} ({} chars)", transcript.len());
            Ok(Json(TranscriptResponse { transcript }))
        }
        Err(e) => {
            error!("Transcript retrieval failed for {url}: {e}");
            Err(ApiError::internal(UNAVAILABLE_HINT))
        }
    }
}
