use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LanguageResp {
    pub code: String,
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct GetLanguagesResp {
    pub languages: Vec<LanguageResp>,
}
