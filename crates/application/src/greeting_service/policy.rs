//! Topic-lock and content-filter predicates.
//!
//! Both checks are deliberate string-matching heuristics, kept as explicit
//! swappable predicates rather than baked into the request flow.

/// Sentinel the model is instructed to emit verbatim for non-Eid requests.
pub const REFUSAL_SENTINEL: &str = "This service is exclusively for generating Eid greetings. \
     Please try again with an Eid greeting request.";

/// Closing phrase in the original Arabic script.
pub const CLOSING_PHRASE_ARABIC: &str = "تَقَبَّلَ اللَّهُ مِنَّا وَمِنْكُمْ";

/// English gloss of the closing phrase.
pub const CLOSING_PHRASE_ENGLISH: &str = "May Allah accept from us and from you.";

const DIVIDER: &str = "✧┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈✧";

/// Static keyword filter over incoming prompts.
#[derive(Debug, Clone)]
pub struct ContentPolicy {
    keywords: Vec<String>,
}

impl ContentPolicy {
    /// Creates a policy from a list of blocked substrings.
    ///
    /// Keywords are normalized to lowercase once at construction.
    #[must_use]
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.to_lowercase())
                .collect(),
        }
    }

    /// Whether the text contains any blocked keyword, case-insensitively.
    #[must_use]
    pub fn is_violation(&self, text: &str) -> bool {
        let normalized = text.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| normalized.contains(keyword.as_str()))
    }
}

// Detection matches only the sentinel's fixed leading sentence, so replies
// that carry the sentinel with trailing variations still trigger the lock.
const REFUSAL_MARKER: &str = "This service is exclusively for generating Eid greetings.";

/// Whether the generated text contains the non-Eid refusal sentinel.
#[must_use]
pub fn is_refusal(text: &str) -> bool {
    text.contains(REFUSAL_MARKER)
}

/// Appends the decorated closing block unless the closing phrase is already
/// present in either script. Idempotent.
#[must_use]
pub fn ensure_closing_phrase(text: String) -> String {
    // The English check drops the trailing period so punctuation variants
    // are still recognized.
    let has_arabic = text.contains(CLOSING_PHRASE_ARABIC);
    let has_english = text
        .to_lowercase()
        .contains("may allah accept from us and from you");

    if has_arabic || has_english {
        return text;
    }

    format!(
        "{text}\n\n{DIVIDER}\n{CLOSING_PHRASE_ARABIC}\n{CLOSING_PHRASE_ENGLISH}\n{DIVIDER}"
    )
}

#[cfg(test)]
mod tests {
    use super::{
        CLOSING_PHRASE_ARABIC, CLOSING_PHRASE_ENGLISH, ContentPolicy, REFUSAL_SENTINEL,
        ensure_closing_phrase, is_refusal,
    };
    use crate::greeting_service::config::GreetingPolicyConfig;

    fn default_policy() -> ContentPolicy {
        ContentPolicy::new(GreetingPolicyConfig::default().blocked_keywords)
    }

    #[test]
    fn keyword_match_is_case_insensitive_substring() {
        let policy = default_policy();
        assert!(policy.is_violation("help me with my BANK Account hack"));
        assert!(policy.is_violation("send me your Credit Card number"));
        assert!(!policy.is_violation("Eid Mubarak to you and your family"));
    }

    #[test]
    fn refusal_detection_matches_the_sentinel() {
        assert!(is_refusal(REFUSAL_SENTINEL));
        assert!(is_refusal(&format!("Note: {REFUSAL_SENTINEL}")));
        assert!(!is_refusal("Eid Mubarak!"));
    }

    #[test]
    fn refusal_detection_matches_a_partial_sentinel() {
        assert!(is_refusal(
            "This service is exclusively for generating Eid greetings. Ask me for one!"
        ));
    }

    #[test]
    fn closing_phrase_is_appended_when_absent() {
        let normalized = ensure_closing_phrase("Eid Mubarak!".to_owned());
        assert!(normalized.contains(CLOSING_PHRASE_ARABIC));
        assert!(normalized.contains(CLOSING_PHRASE_ENGLISH));
    }

    #[test]
    fn closing_phrase_is_skipped_when_arabic_present() {
        let text = format!("Eid Mubarak!\n{CLOSING_PHRASE_ARABIC}");
        assert_eq!(ensure_closing_phrase(text.clone()), text);
    }

    #[test]
    fn closing_phrase_is_skipped_when_english_gloss_present() {
        let text = "Eid Mubarak! MAY ALLAH ACCEPT FROM US AND FROM YOU.".to_owned();
        assert_eq!(ensure_closing_phrase(text.clone()), text);
    }

    #[test]
    fn closing_phrase_gloss_is_recognized_without_trailing_period() {
        let text = "Eid Mubarak! May Allah accept from us and from you, always!".to_owned();
        assert_eq!(ensure_closing_phrase(text.clone()), text);
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = ensure_closing_phrase("Eid Mubarak!".to_owned());
        let twice = ensure_closing_phrase(once.clone());
        assert_eq!(once, twice);
    }
}
