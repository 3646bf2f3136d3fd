use capability::models::{
    language_detection::{LanguageDetection, LanguageDetectionRequest},
    summarization::{Summarization, SummarizationRequest},
    translation::{Translation, TranslationRequest},
    Models,
};
use entity::prelude::Language;
use tracing::{error, warn};

/// Sentinel recorded when detection was attempted but failed. Distinct from
/// any real language code so a failed detection never satisfies the summary
/// gate.
pub static UNKNOWN_LANGUAGE: &str = "Unknown";

static FALLBACK_LANGUAGE: &str = "en";
static MOCK_SUMMARY: &str = "Mock Summary";
static MOCK_TRANSLATION: &str = "Mock Translation";

/// The three capabilities the coordinator depends on, each independently
/// optional. `None` means the capability was not configured; every call
/// site checks its own handle right before calling, so one missing
/// capability never affects the others.
#[derive(Clone, Debug, Default)]
pub struct Capabilities {
    pub language_detection: Option<Models>,
    pub summarization: Option<Models>,
    pub translation: Option<Models>,
}

/// Never fails: a missing capability falls back to the mock code, a failed
/// invocation downgrades to the sentinel. Either way the submission flow
/// continues.
pub async fn detect_language(
    capabilities: &Capabilities,
    text: &str,
) -> String {
    let Some(models) = &capabilities.language_detection else {
        warn!(
            task = "detect language",
            "capability not available, using mock response"
        );
        return FALLBACK_LANGUAGE.to_string();
    };

    let request = LanguageDetectionRequest {
        text: text.to_string(),
    };

    match models.fasttext_language_identification(request).await {
        Ok(response) => response
            .result
            .languages
            .first()
            .map(|l| l.language.clone())
            .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
        Err(e) => {
            error!(task = "detect language", err = format!("{:?}", e));
            UNKNOWN_LANGUAGE.to_string()
        }
    }
}

pub async fn summarize_text(
    capabilities: &Capabilities,
    text: &str,
) -> anyhow::Result<String> {
    let Some(models) = &capabilities.summarization else {
        warn!(
            task = "summarize text",
            "capability not available, using mock response"
        );
        return Ok(MOCK_SUMMARY.to_string());
    };

    let request = SummarizationRequest {
        input_text: text.to_string(),
        max_length: None,
    };

    let response = models.bart_large_cnn(request).await?;

    Ok(response.result.summary)
}

pub async fn translate_text(
    capabilities: &Capabilities,
    text: &str,
    target_lang: Language,
) -> anyhow::Result<String> {
    let Some(models) = &capabilities.translation else {
        warn!(
            task = "translate text",
            target_lang = target_lang.code(),
            "capability not available, using mock response"
        );
        return Ok(MOCK_TRANSLATION.to_string());
    };

    let request = TranslationRequest {
        text: text.to_string(),
        source_lang: None,
        target_lang: target_lang.code().to_string(),
    };

    let response = models.m2m100_1_2b(request).await?;

    Ok(response.result.translated_text)
}

#[cfg(test)]
mod test {
    use capability::models::Models;
    use entity::prelude::Language;

    use super::{
        detect_language, summarize_text, translate_text, Capabilities,
    };

    // nothing listens here, so every invocation fails fast
    fn unreachable_models() -> Models {
        Models::new("token", "account", "http://127.0.0.1:9").unwrap()
    }

    #[tokio::test]
    async fn test_absent_capabilities_fall_back_to_mocks() {
        // Arrange
        let capabilities = Capabilities::default();

        // Act
        let code = detect_language(&capabilities, "Hello").await;
        let summary = summarize_text(&capabilities, "Hello").await;
        let translation =
            translate_text(&capabilities, "Hello", Language::Es).await;

        // Assert
        assert_eq!(code, "en");
        assert_eq!(summary.unwrap(), "Mock Summary");
        assert_eq!(translation.unwrap(), "Mock Translation");
    }

    #[tokio::test]
    async fn test_failed_detection_downgrades_to_sentinel() {
        // Arrange
        let capabilities = Capabilities {
            language_detection: Some(unreachable_models()),
            ..Default::default()
        };

        // Act
        let code = detect_language(&capabilities, "Hello").await;

        // Assert
        assert_eq!(code, "Unknown");
    }

    #[tokio::test]
    async fn test_failed_summarization_surfaces_the_error() {
        // Arrange
        let capabilities = Capabilities {
            summarization: Some(unreachable_models()),
            ..Default::default()
        };

        // Act
        let summary = summarize_text(&capabilities, "Hello").await;

        // Assert
        assert!(summary.is_err());
    }

    #[tokio::test]
    async fn test_capabilities_are_independent() {
        // Arrange
        let capabilities = Capabilities {
            language_detection: Some(unreachable_models()),
            ..Default::default()
        };

        // Act
        let summary = summarize_text(&capabilities, "Hello").await;
        let translation =
            translate_text(&capabilities, "Hello", Language::Fr).await;

        // Assert
        assert_eq!(summary.unwrap(), "Mock Summary");
        assert_eq!(translation.unwrap(), "Mock Translation");
    }
}
