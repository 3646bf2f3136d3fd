use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Translation targets offered by the chat. The set is closed on purpose,
/// anything else is rejected before a capability call is made.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Pt,
    Es,
    Ru,
    Tr,
    Fr,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
            Language::Es => "es",
            Language::Ru => "ru",
            Language::Tr => "tr",
            Language::Fr => "fr",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Pt => "Portuguese",
            Language::Es => "Spanish",
            Language::Ru => "Russian",
            Language::Tr => "Turkish",
            Language::Fr => "French",
        }
    }

    pub fn from_code(code: &str) -> anyhow::Result<Self> {
        use strum::IntoEnumIterator;

        for language in Self::iter() {
            if language.code() == code {
                return Ok(language);
            }
        }

        bail!(
            "unsupported target language: {}, expected one of {}",
            code,
            Self::all()
                .iter()
                .map(|l| l.code())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }

    pub fn all() -> Vec<Self> {
        use strum::IntoEnumIterator;

        Self::iter().collect()
    }
}
