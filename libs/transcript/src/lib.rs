use message::MessageStore;

pub mod message;

/// Session-scoped, append-only record of submitted messages. Nothing is
/// persisted; the transcript lives and dies with the process.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    pub message: MessageStore,
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("message {id} does not exist")]
    MessageNotFound { id: u64 },

    #[error("detected language is already recorded for message {id}")]
    LanguageAlreadySet { id: u64 },
}

pub type Response<T> = Result<T, TranscriptError>;

pub fn init_transcript() -> Transcript {
    Transcript {
        message: MessageStore::new(),
    }
}
