use chrono::{DateTime, Utc};
use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::SummaryPolicy;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResp {
    pub id: u64,
    pub text: String,
    pub detected_language: Option<String>,
    /// Whether the UI should offer the summarize action for this message.
    pub summary_available: bool,
    pub summaries: Vec<String>,
    pub translations: Vec<TranslationResp>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TranslationResp {
    pub target_lang: String,
    pub text: String,
}

#[derive(Serialize, ToSchema)]
pub struct GetMessagesResp {
    pub messages: Vec<MessageResp>,
}

impl MessageResp {
    pub(crate) fn new(message: Message, policy: &SummaryPolicy) -> Self {
        let summary_available = message
            .detected_language
            .as_deref()
            .map(|code| policy.offers_summary(&message.text, code))
            .unwrap_or(false);

        Self {
            id: message.id,
            text: message.text,
            detected_language: message.detected_language,
            summary_available,
            summaries: message.summaries,
            translations: message
                .translations
                .into_iter()
                .map(|t| TranslationResp {
                    target_lang: t.target_lang.code().to_string(),
                    text: t.text,
                })
                .collect(),
            created_at: message.created_at,
        }
    }
}

#[cfg(test)]
mod test {
    use entity::prelude::*;

    use super::MessageResp;
    use crate::SummaryPolicy;

    #[test]
    fn test_serialized_shape_matches_the_page_contract() {
        // Arrange
        let message = Message {
            id: 3,
            text: "Hello".to_string(),
            detected_language: Some("en".to_string()),
            summaries: vec![],
            translations: vec![Translation {
                target_lang: Language::Es,
                text: "Hola".to_string(),
            }],
            ..Default::default()
        };
        let policy = SummaryPolicy {
            min_chars: 150,
            language: "en".to_string(),
        };

        // Act
        let value =
            serde_json::to_value(MessageResp::new(message, &policy)).unwrap();

        // Assert
        assert_eq!(value["id"], 3);
        assert_eq!(value["detected_language"], "en");
        assert_eq!(value["summary_available"], false);
        assert_eq!(value["translations"][0]["target_lang"], "es");
        assert_eq!(value["translations"][0]["text"], "Hola");
    }
}
