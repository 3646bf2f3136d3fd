use axum::Json;
use entity::prelude::*;

pub mod response;

use self::response::{GetLanguagesResp, LanguageResp};

#[utoipa::path(
    get,
    path = "/languages",
    responses((status = 200, description = "translation targets", body = GetLanguagesResp))
)]
pub async fn get_languages() -> Json<GetLanguagesResp> {
    Json(GetLanguagesResp {
        languages: Language::all()
            .into_iter()
            .map(|language| LanguageResp {
                code: language.code().to_string(),
                name: language.name().to_string(),
            })
            .collect(),
    })
}
