//! Greeting options selected by the caller and the client-side prompt
//! composition they drive.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

/// Output language for the generated greeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English greeting text (default).
    #[default]
    English,
    /// Urdu script greeting text with right-to-left formatting.
    Urdu,
}

impl Language {
    fn from_key(value: &str) -> Option<Self> {
        match value {
            "english" => Some(Self::English),
            "urdu" => Some(Self::Urdu),
            _ => None,
        }
    }

    /// Returns the wire key for this language.
    #[must_use]
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Urdu => "urdu",
        }
    }
}

impl Display for Language {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.as_key())
    }
}

// Unrecognized language values degrade to the default rather than failing
// the request.
impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_key(&value.to_lowercase()).unwrap_or_default())
    }
}

/// Recipient or register of the greeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// General warm tone (default).
    #[default]
    General,
    /// Warm, loving and familiar.
    Family,
    /// Cheerful and casual.
    Friends,
    /// Romantic and affectionate.
    Spouse,
    /// Respectful and dignified.
    Formal,
    /// Energetic and relatable to young adults.
    College,
    /// The caller's free-text prompt is used verbatim.
    Custom,
}

impl Tone {
    fn from_key(value: &str) -> Option<Self> {
        match value {
            "general" => Some(Self::General),
            "family" => Some(Self::Family),
            "friends" => Some(Self::Friends),
            "spouse" => Some(Self::Spouse),
            "formal" => Some(Self::Formal),
            "college" => Some(Self::College),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Returns the wire key for this tone.
    #[must_use]
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Family => "family",
            Self::Friends => "friends",
            Self::Spouse => "spouse",
            Self::Formal => "formal",
            Self::College => "college",
            Self::Custom => "custom",
        }
    }
}

impl Display for Tone {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.as_key())
    }
}

impl<'de> Deserialize<'de> for Tone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_key(&value.to_lowercase()).unwrap_or_default())
    }
}

/// Options selected by the caller for one greeting request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GreetingOptions {
    /// Output language.
    pub language: Language,
    /// Recipient or register.
    pub tone: Tone,
    /// Whether to ask for a relevant hadith.
    pub include_hadith: bool,
    /// Whether to ask for a relevant Quranic ayat.
    pub include_quran: bool,
}

impl GreetingOptions {
    /// Composes the outgoing prompt from the structured options.
    ///
    /// With the `custom` tone and non-empty detail text, the detail is used
    /// verbatim. Otherwise the options are rendered into a natural-language
    /// instruction, with the detail appended as additional context.
    #[must_use]
    pub fn compose_prompt(&self, detail: &str) -> String {
        let detail = detail.trim();

        if self.tone == Tone::Custom && !detail.is_empty() {
            return detail.to_owned();
        }

        let mut prompt = format!(
            "Generate an Eid greeting in {} with a {} tone",
            self.language, self.tone
        );

        if self.include_hadith {
            prompt.push_str(", include a relevant Hadith");
        }

        if self.include_quran {
            prompt.push_str(", include a relevant Quranic ayat");
        }

        if !detail.is_empty() {
            prompt.push_str(". Additional details: ");
            prompt.push_str(detail);
        }

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::{GreetingOptions, Language, Tone};

    #[test]
    fn default_options_compose_a_general_english_prompt() {
        let options = GreetingOptions::default();
        assert_eq!(
            options.compose_prompt(""),
            "Generate an Eid greeting in english with a general tone"
        );
    }

    #[test]
    fn citation_flags_and_detail_are_appended() {
        let options = GreetingOptions {
            language: Language::Urdu,
            tone: Tone::Family,
            include_hadith: true,
            include_quran: true,
        };
        assert_eq!(
            options.compose_prompt("for my parents"),
            "Generate an Eid greeting in urdu with a family tone, \
             include a relevant Hadith, include a relevant Quranic ayat. \
             Additional details: for my parents"
        );
    }

    #[test]
    fn custom_tone_uses_detail_verbatim() {
        let options = GreetingOptions {
            tone: Tone::Custom,
            ..GreetingOptions::default()
        };
        assert_eq!(
            options.compose_prompt("  a greeting for my brother  "),
            "a greeting for my brother"
        );
    }

    #[test]
    fn custom_tone_without_detail_falls_back_to_composition() {
        let options = GreetingOptions {
            tone: Tone::Custom,
            ..GreetingOptions::default()
        };
        assert_eq!(
            options.compose_prompt(""),
            "Generate an Eid greeting in english with a custom tone"
        );
    }

    #[test]
    fn unknown_wire_values_fall_back_to_defaults() {
        let parsed: Result<GreetingOptions, _> =
            serde_json::from_str(r#"{"language":"arabic","tone":"boss"}"#);
        let Ok(options) = parsed else {
            panic!("expected lenient deserialization");
        };
        assert_eq!(options.language, Language::English);
        assert_eq!(options.tone, Tone::General);
    }

    #[test]
    fn known_wire_values_deserialize() {
        let parsed: Result<GreetingOptions, _> = serde_json::from_str(
            r#"{"language":"urdu","tone":"spouse","includeHadith":true}"#,
        );
        let Ok(options) = parsed else {
            panic!("expected valid options");
        };
        assert_eq!(options.language, Language::Urdu);
        assert_eq!(options.tone, Tone::Spouse);
        assert!(options.include_hadith);
        assert!(!options.include_quran);
    }
}
