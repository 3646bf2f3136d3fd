use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// One user submission and everything derived from it. `detected_language`
/// is recorded at most once; summaries and translations only ever grow.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub detected_language: Option<String>,
    pub summaries: Vec<String>,
    pub translations: Vec<Translation>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub target_lang: Language,
    pub text: String,
}
