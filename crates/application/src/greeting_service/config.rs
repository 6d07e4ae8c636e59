use std::collections::HashMap;

use tahniyat_domain::Tone;

/// One example citation used as few-shot grounding in the system instruction.
#[derive(Debug, Clone)]
pub struct Citation {
    /// Citation text.
    pub text: String,
    /// Source reference.
    pub reference: String,
}

impl Citation {
    fn new(text: &str, reference: &str) -> Self {
        Self {
            text: text.to_owned(),
            reference: reference.to_owned(),
        }
    }
}

/// Policy configuration injected into the greeting service.
///
/// Quota thresholds, the blocked-keyword list, the few-shot citation examples
/// and the tone guidance map are plain data so the policy can be replaced
/// without touching the request flow.
#[derive(Debug, Clone)]
pub struct GreetingPolicyConfig {
    /// Requests permitted per client within one quota window.
    pub max_requests_per_window: i64,
    /// Quota window duration in seconds. The counter resets wholesale when
    /// its time-to-live expires (fixed window, not sliding).
    pub window_seconds: i64,
    /// Time-to-live of a block flag, in seconds.
    pub block_ttl_seconds: i64,
    /// Case-insensitive substrings that reject a prompt outright.
    pub blocked_keywords: Vec<String>,
    /// Example Quranic verses for few-shot grounding.
    pub quran_examples: Vec<Citation>,
    /// Example hadiths for few-shot grounding.
    pub hadith_examples: Vec<Citation>,
    /// Guidance text appended to the instruction per tone.
    pub tone_guidance: HashMap<Tone, String>,
}

impl Default for GreetingPolicyConfig {
    fn default() -> Self {
        Self {
            max_requests_per_window: 5,
            window_seconds: 60 * 60,
            block_ttl_seconds: 24 * 60 * 60,
            blocked_keywords: default_blocked_keywords(),
            quran_examples: default_quran_examples(),
            hadith_examples: default_hadith_examples(),
            tone_guidance: default_tone_guidance(),
        }
    }
}

fn default_blocked_keywords() -> Vec<String> {
    [
        "password",
        "hack",
        "credit card",
        "bank",
        "account",
        "attack",
        "exploit",
        "vulnerable",
        "steal",
        "scam",
        "illegal",
        "drugs",
        "weapon",
        "violence",
        "politics",
        "porn",
        "sex",
        "nude",
        "casino",
        "gambling",
        "bitcoin",
        "crypto",
        "investment",
        "money",
        "fraud",
        "malware",
        "virus",
        "trojan",
        "phishing",
        "script",
        "admin",
        "ssh",
        "login",
        "credentials",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

fn default_quran_examples() -> Vec<Citation> {
    vec![
        Citation::new(
            "He wants you to complete the prescribed period and to glorify Allah for \
             having guided you, so that you may be grateful to Him.",
            "Quran 2:185",
        ),
        Citation::new(
            "So when you have accomplished your rites, remember Allah as you remember \
             your fathers or with a stronger remembrance.",
            "Quran 2:200",
        ),
        Citation::new(
            "And eat and drink until the white thread of dawn becomes distinct to you \
             from the black thread. Then complete the fast until the night.",
            "Quran 2:187",
        ),
        Citation::new(
            "O you who have believed, decreed upon you is fasting as it was decreed \
             upon those before you that you may become righteous.",
            "Quran 2:183",
        ),
        Citation::new(
            "Indeed, We have granted you, [O Muhammad], al-Kawthar. So pray to your \
             Lord and sacrifice [to Him alone]. Indeed, your enemy is the one cut off.",
            "Quran 108:1-3",
        ),
    ]
}

fn default_hadith_examples() -> Vec<Citation> {
    vec![
        Citation::new(
            "When the month of Ramadan is over, and the night of Eid-ul-Fitr has \
             arrived, that night is called the Night of Prize. Then, in the early \
             morning of Eid-ul-Fitr Allah will send His angels to visit all the towns \
             and cities on the earth below.",
            "Narrated by Anas ibn Malik (RA)",
        ),
        Citation::new(
            "The Prophet (ﷺ) said: 'When someone fasts during Ramadan out of sincere \
             faith and hoping to earn reward, all his previous sins will be forgiven.'",
            "Sahih Al-Bukhari",
        ),
        Citation::new(
            "The Messenger of Allah (ﷺ) would not go out on the morning of Eid \
             al-Fitr until he had eaten some dates, and he would eat an odd number.",
            "Sahih Al-Bukhari",
        ),
        Citation::new(
            "The Prophet (ﷺ) ordered us to pay Zakat-ul-Fitr before the Eid prayer.",
            "Sahih Al-Bukhari",
        ),
        Citation::new(
            "The Prophet (ﷺ) said: 'Fasting and the Quran will intercede for the \
             servant on the Day of Resurrection.'",
            "Ahmad",
        ),
    ]
}

fn default_tone_guidance() -> HashMap<Tone, String> {
    HashMap::from([
        (
            Tone::Family,
            "The tone should be warm, loving, and familiar, expressing deep connection \
             and care."
                .to_owned(),
        ),
        (
            Tone::Friends,
            "The tone should be cheerful, casual, and full of camaraderie.".to_owned(),
        ),
        (
            Tone::Spouse,
            "The tone should be romantic, intimate, and deeply affectionate.".to_owned(),
        ),
        (
            Tone::Formal,
            "The tone should be respectful, dignified, and professionally appropriate."
                .to_owned(),
        ),
        (
            Tone::College,
            "The tone should be energetic, modern, and relatable to young adults.".to_owned(),
        ),
    ])
}
