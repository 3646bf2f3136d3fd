use std::sync::Arc;

use chrono::Utc;
use entity::prelude::*;
use tokio::sync::RwLock;

use crate::{Response, TranscriptError};

/// Arena of messages. The id of a message is its position in the arena, so
/// ids are monotonically increasing and lookups never move entries around.
#[derive(Clone, Debug, Default)]
pub struct MessageStore {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, text: String) -> Message {
        let mut messages = self.messages.write().await;
        let message = Message {
            id: messages.len() as u64,
            text,
            detected_language: None,
            summaries: vec![],
            translations: vec![],
            created_at: Utc::now(),
        };
        messages.push(message.clone());

        message
    }

    pub async fn find_all(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    pub async fn find_by_id(&self, id: u64) -> Option<Message> {
        self.messages.read().await.get(id as usize).cloned()
    }

    pub async fn record_language(
        &self,
        id: u64,
        code: &str,
    ) -> Response<Message> {
        let mut messages = self.messages.write().await;
        let message = messages
            .get_mut(id as usize)
            .ok_or(TranscriptError::MessageNotFound { id })?;

        if message.detected_language.is_some() {
            return Err(TranscriptError::LanguageAlreadySet { id });
        }

        message.detected_language = Some(code.to_string());

        Ok(message.clone())
    }

    pub async fn append_summary(
        &self,
        id: u64,
        summary: String,
    ) -> Response<Message> {
        let mut messages = self.messages.write().await;
        let message = messages
            .get_mut(id as usize)
            .ok_or(TranscriptError::MessageNotFound { id })?;

        message.summaries.push(summary);

        Ok(message.clone())
    }

    pub async fn append_translation(
        &self,
        id: u64,
        translation: Translation,
    ) -> Response<Message> {
        let mut messages = self.messages.write().await;
        let message = messages
            .get_mut(id as usize)
            .ok_or(TranscriptError::MessageNotFound { id })?;

        message.translations.push(translation);

        Ok(message.clone())
    }
}

#[cfg(test)]
mod test {
    use entity::prelude::*;

    use super::MessageStore;
    use crate::TranscriptError;

    #[tokio::test]
    async fn test_append_assigns_ids_in_submission_order() {
        // Arrange
        let store = MessageStore::new();

        // Act
        let first = store.append("first".to_string()).await;
        let second = store.append("second".to_string()).await;
        let all = store.find_all().await;

        // Assert
        assert_eq!(first.id, 0);
        assert_eq!(second.id, 1);
        assert_eq!(
            all.iter().map(|m| m.text.as_str()).collect::<Vec<_>>(),
            vec!["first", "second"]
        );
    }

    #[tokio::test]
    async fn test_record_language_is_set_once() {
        // Arrange
        let store = MessageStore::new();
        let message = store.append("hola".to_string()).await;

        // Act
        let first = store.record_language(message.id, "es").await;
        let second = store.record_language(message.id, "en").await;

        // Assert
        assert_eq!(
            first.unwrap().detected_language.as_deref(),
            Some("es")
        );
        assert!(matches!(
            second,
            Err(TranscriptError::LanguageAlreadySet { id: 0 })
        ));
        let stored = store.find_by_id(message.id).await.unwrap();
        assert_eq!(stored.detected_language.as_deref(), Some("es"));
    }

    #[tokio::test]
    async fn test_append_to_missing_message() {
        // Arrange
        let store = MessageStore::new();

        // Act
        let result = store.append_summary(42, "summary".to_string()).await;

        // Assert
        assert!(matches!(
            result,
            Err(TranscriptError::MessageNotFound { id: 42 })
        ));
    }

    #[tokio::test]
    async fn test_translations_accumulate_in_call_order() {
        // Arrange
        let store = MessageStore::new();
        let message = store.append("hello".to_string()).await;

        // Act
        for target_lang in [Language::Es, Language::Fr, Language::Es] {
            store
                .append_translation(
                    message.id,
                    Translation {
                        target_lang,
                        text: format!("hello in {}", target_lang.code()),
                    },
                )
                .await
                .unwrap();
        }
        let stored = store.find_by_id(message.id).await.unwrap();

        // Assert
        assert_eq!(stored.translations.len(), 3);
        assert_eq!(
            stored
                .translations
                .iter()
                .map(|t| t.target_lang.code())
                .collect::<Vec<_>>(),
            vec!["es", "fr", "es"]
        );
    }

    #[tokio::test]
    async fn test_summaries_are_not_deduplicated() {
        // Arrange
        let store = MessageStore::new();
        let message = store.append("a long text".to_string()).await;

        // Act
        store
            .append_summary(message.id, "summary".to_string())
            .await
            .unwrap();
        store
            .append_summary(message.id, "summary".to_string())
            .await
            .unwrap();
        let stored = store.find_by_id(message.id).await.unwrap();

        // Assert
        assert_eq!(stored.summaries, vec!["summary", "summary"]);
    }
}
