use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct PostMessageRequest {
    pub text: String,
}

#[derive(Deserialize, ToSchema)]
pub struct PostTranslationRequest {
    pub target_lang: String,
}
