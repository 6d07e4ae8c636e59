//! Append-only audit and usage log entries.
//!
//! Entries carry abbreviated identities and truncated prompt text, never the
//! full values. They are pushed to external append-only lists and are never
//! mutated or deleted by this system.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::ClientId;
use crate::greeting::{GreetingOptions, Language, Tone};

/// Outcome recorded in a security log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SecurityAction {
    /// The static content filter matched the prompt.
    #[serde(rename = "blocked")]
    Blocked,
    /// The generated text contained the non-Eid refusal sentinel.
    #[serde(rename = "blocked-non-eid")]
    BlockedNonEid,
}

/// One entry in the security log list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityLogEntry {
    /// When the entry was recorded.
    pub timestamp: DateTime<Utc>,
    /// Abbreviated client identity.
    pub client_id: String,
    /// Truncated prompt text.
    pub prompt: String,
    /// What triggered the entry.
    pub action: SecurityAction,
}

impl SecurityLogEntry {
    const PROMPT_PREVIEW_CHARS: usize = 50;

    /// Creates an entry for the given client and prompt, stamped now.
    #[must_use]
    pub fn new(client: &ClientId, prompt: &str, action: SecurityAction) -> Self {
        let preview: String = prompt.chars().take(Self::PROMPT_PREVIEW_CHARS).collect();

        Self {
            timestamp: Utc::now(),
            client_id: client.redacted(),
            prompt: format!("{preview}..."),
            action,
        }
    }
}

/// One entry in the usage log list.
///
/// Captures the selected options and text lengths, not the full text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageLogEntry {
    /// When the entry was recorded.
    pub timestamp: DateTime<Utc>,
    /// Abbreviated client identity.
    pub client_id: String,
    /// Selected output language.
    pub language: Language,
    /// Selected tone.
    pub tone: Tone,
    /// Whether a hadith was requested.
    pub include_hadith: bool,
    /// Whether a Quranic ayat was requested.
    pub include_quran: bool,
    /// Length of the prompt, in characters.
    pub prompt_length: usize,
    /// Length of the generated greeting, in characters.
    pub response_length: usize,
}

impl UsageLogEntry {
    /// Creates an entry for a successful generation, stamped now.
    #[must_use]
    pub fn new(
        client: &ClientId,
        options: &GreetingOptions,
        prompt_length: usize,
        response_length: usize,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            client_id: client.redacted(),
            language: options.language,
            tone: options.tone,
            include_hadith: options.include_hadith,
            include_quran: options.include_quran,
            prompt_length,
            response_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SecurityAction, SecurityLogEntry, UsageLogEntry};
    use crate::client::ClientId;
    use crate::greeting::{GreetingOptions, Language, Tone};

    fn test_client() -> ClientId {
        ClientId::derive(Some("203.0.113.7"), Some("curl/8.5"))
    }

    #[test]
    fn security_entry_truncates_prompt_and_identity() {
        let prompt = "p".repeat(80);
        let entry = SecurityLogEntry::new(&test_client(), &prompt, SecurityAction::Blocked);

        assert_eq!(entry.client_id, "203.0.113...");
        assert_eq!(entry.prompt.chars().count(), 53);
        assert!(entry.prompt.ends_with("..."));
    }

    #[test]
    fn security_action_serializes_to_fixed_names() {
        let Ok(blocked) = serde_json::to_string(&SecurityAction::Blocked) else {
            panic!("serialization failed");
        };
        let Ok(non_eid) = serde_json::to_string(&SecurityAction::BlockedNonEid) else {
            panic!("serialization failed");
        };
        assert_eq!(blocked, r#""blocked""#);
        assert_eq!(non_eid, r#""blocked-non-eid""#);
    }

    #[test]
    fn usage_entry_serializes_camel_case_fields() {
        let options = GreetingOptions {
            language: Language::Urdu,
            tone: Tone::Formal,
            include_hadith: true,
            include_quran: false,
        };
        let entry = UsageLogEntry::new(&test_client(), &options, 42, 400);

        let Ok(json) = serde_json::to_value(&entry) else {
            panic!("serialization failed");
        };
        assert_eq!(json["language"], "urdu");
        assert_eq!(json["tone"], "formal");
        assert_eq!(json["includeHadith"], true);
        assert_eq!(json["promptLength"], 42);
        assert_eq!(json["responseLength"], 400);
    }
}
