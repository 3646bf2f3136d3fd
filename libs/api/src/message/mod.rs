use axum::{
    extract::{Path, State},
    Json,
};
use entity::prelude::*;
use tracing::{error, info};

pub mod request;
pub mod response;

use crate::{
    capabilities,
    response::{ApiResponse, IntoApiResponse},
    ApiError, ApiState,
};

use self::{
    request::{PostMessageRequest, PostTranslationRequest},
    response::{GetMessagesResp, MessageResp},
};

static EMPTY_INPUT: &str = "Please enter some text.";
static PROCESSING_FAILED: &str =
    "An error occurred while processing your request.";
static SUMMARIZE_FAILED: &str = "Failed to summarize text.";
static TRANSLATE_FAILED: &str = "Failed to translate text.";

#[utoipa::path(
    post,
    path = "/messages",
    request_body = PostMessageRequest,
    responses(
        (status = 200, description = "submitted message with its detected language", body = MessageResp),
        (status = 400, description = "empty input"),
    )
)]
pub async fn post_message(
    State(state): State<ApiState>,
    Json(body): Json<PostMessageRequest>,
) -> ApiResponse<Json<MessageResp>> {
    let text = body.text.trim().to_string();
    if text.is_empty() {
        return Err(ApiError::ClientError(EMPTY_INPUT.to_string()));
    }

    // the shell enters the transcript before any capability is awaited, so
    // readers observe the submission even while detection is in flight
    let message = state.transcript.message.append(text).await;
    info!(task = "append message", id = message.id);

    let code =
        capabilities::detect_language(&state.capabilities, &message.text)
            .await;

    let message = state
        .transcript
        .message
        .record_language(message.id, &code)
        .await
        .into_response(PROCESSING_FAILED)?;

    Ok(Json(MessageResp::new(message, &state.config.summary)))
}

#[utoipa::path(
    get,
    path = "/messages",
    responses((status = 200, description = "every message in submission order", body = GetMessagesResp))
)]
pub async fn get_messages(
    State(state): State<ApiState>,
) -> ApiResponse<Json<GetMessagesResp>> {
    let messages = state.transcript.message.find_all().await;

    Ok(Json(GetMessagesResp {
        messages: messages
            .into_iter()
            .map(|m| MessageResp::new(m, &state.config.summary))
            .collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/messages/{id}",
    params(("id" = u64, Path, description = "message handle")),
    responses(
        (status = 200, description = "one message", body = MessageResp),
        (status = 400, description = "unknown message"),
    )
)]
pub async fn get_message(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
) -> ApiResponse<Json<MessageResp>> {
    let message = find_message(&state, id).await?;

    Ok(Json(MessageResp::new(message, &state.config.summary)))
}

#[utoipa::path(
    post,
    path = "/messages/{id}/summary",
    params(("id" = u64, Path, description = "message handle")),
    responses(
        (status = 200, description = "message with one more summary", body = MessageResp),
        (status = 400, description = "unknown message"),
        (status = 502, description = "summarization capability failed"),
    )
)]
pub async fn post_summary(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
) -> ApiResponse<Json<MessageResp>> {
    let message = find_message(&state, id).await?;

    let summary =
        capabilities::summarize_text(&state.capabilities, &message.text)
            .await
            .map_err(|e| {
                error!(task = "summarize text", id, err = format!("{:?}", e));
                ApiError::UpstreamError(SUMMARIZE_FAILED.to_string())
            })?;

    let message = state
        .transcript
        .message
        .append_summary(id, summary)
        .await
        .into_response(PROCESSING_FAILED)?;

    Ok(Json(MessageResp::new(message, &state.config.summary)))
}

#[utoipa::path(
    post,
    path = "/messages/{id}/translations",
    params(("id" = u64, Path, description = "message handle")),
    request_body = PostTranslationRequest,
    responses(
        (status = 200, description = "message with one more translation", body = MessageResp),
        (status = 400, description = "unknown message or unsupported target"),
        (status = 502, description = "translation capability failed"),
    )
)]
pub async fn post_translation(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
    Json(body): Json<PostTranslationRequest>,
) -> ApiResponse<Json<MessageResp>> {
    let target_lang = Language::from_code(&body.target_lang)
        .map_err(|e| ApiError::ClientError(e.to_string()))?;

    let message = find_message(&state, id).await?;

    let text = capabilities::translate_text(
        &state.capabilities,
        &message.text,
        target_lang,
    )
    .await
    .map_err(|e| {
        error!(
            task = "translate text",
            id,
            target_lang = target_lang.code(),
            err = format!("{:?}", e)
        );
        ApiError::UpstreamError(TRANSLATE_FAILED.to_string())
    })?;

    let message = state
        .transcript
        .message
        .append_translation(id, Translation { target_lang, text })
        .await
        .into_response(PROCESSING_FAILED)?;

    Ok(Json(MessageResp::new(message, &state.config.summary)))
}

async fn find_message(state: &ApiState, id: u64) -> ApiResponse<Message> {
    state
        .transcript
        .message
        .find_by_id(id)
        .await
        .ok_or_else(|| {
            ApiError::ClientError(format!("message {} does not exist", id))
        })
}
