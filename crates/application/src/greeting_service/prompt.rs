//! System instruction assembly.

use std::fmt::Write as _;

use tahniyat_domain::{GreetingOptions, Language, Tone};

use super::config::GreetingPolicyConfig;
use super::policy::REFUSAL_SENTINEL;

/// Fixed acknowledgement used as the synthetic prior "model" turn when the
/// instruction is sent as conversation history.
pub const MODEL_ACKNOWLEDGEMENT: &str =
    "I understand. I will generate beautifully formatted Eid al-Fitr greetings based on \
     your requests, with decorative elements, proper spacing, and visual appeal. I'll \
     ensure Urdu text is properly formatted with right-to-left support, and I'll include \
     tastefully decorated Quranic verses and Hadiths as requested.";

/// Builds the system instruction for one request from the injected policy
/// configuration and the caller's options.
#[must_use]
pub fn build_system_instruction(
    config: &GreetingPolicyConfig,
    options: &GreetingOptions,
) -> String {
    let quran_label = match options.language {
        Language::Urdu => "قرآن پاک",
        Language::English => "QURAN",
    };
    let hadith_label = match options.language {
        Language::Urdu => "حدیث شریف",
        Language::English => "HADITH",
    };

    let mut instruction = format!(
        "You are an assistant specialized in crafting Eid al-Fitr greetings.\n\
         Your goal is to generate a warm, appropriate, and visually appealing Eid \
         greeting based on the user's request.\n\
         \n\
         Instructions:\n\
         1. Generate only the greeting message itself, without any preamble like \
         \"Okay, here is your greeting:\".\n\
         2. Format the greeting beautifully:\n\
         \x20  * Use emoji decorations where appropriate (like 🌙 ✨ 🕌 ☪️ 🎊 🎉)\n\
         \x20  * Add decorative Unicode symbols to create borders or dividers \
         (like ┈ ┉ ┅ ● ○ ♦ ✦ ✧ ❁ ✽ ✾)\n\
         \x20  * Break text into visually appealing sections with line breaks and spacing\n\
         \x20  * For Urdu text, ensure proper right-to-left formatting and use \
         appropriate Urdu Unicode characters\n\
         3. Analyze the user's request for specific requirements:\n\
         \x20  * Recipient/Tone: (e.g., family, friend, spouse, formal, college group). \
         Adjust the warmth and formality accordingly. Default to a general warm tone if \
         not specified.\n\
         \x20  * Language: Generate the greeting in the requested language. Default to \
         English if not specified. For Urdu, use proper Urdu script, not transliteration.\n\
         \x20  * Conciseness: Keep the greeting relatively short, suitable for sending \
         as a message.\n\
         4. If the user asks for something unrelated to Eid greetings, respond ONLY \
         with: \"{REFUSAL_SENTINEL}\"\n\
         5. Dynamically generate a Quranic verse and/or Hadith strictly related to \
         post-Ramadan and Eid al-Fitr. Use the following examples as inspiration to \
         ensure relevance and accuracy:\n"
    );

    instruction.push_str("   Quranic Verse Examples:\n");
    for example in &config.quran_examples {
        let _ = writeln!(instruction, "   \"{} - {}\"", example.text, example.reference);
    }

    instruction.push_str("   Hadith Examples:\n");
    for example in &config.hadith_examples {
        let _ = writeln!(instruction, "   \"{} - {}\"", example.text, example.reference);
    }

    let _ = write!(
        instruction,
        "6. Format generated Quranic verses and Hadiths in a visually appealing way:\n\
         \x20  * For Quranic verses: a \"📖 {quran_label}\" heading between decorative \
         divider lines, the verse in quotes, then its reference on its own line\n\
         \x20  * For Hadiths: a \"🕌 {hadith_label}\" heading between decorative divider \
         lines, the hadith in quotes, then its reference on its own line\n\
         7. Ensure all generated content focuses specifically on:\n\
         \x20  * The completion of Ramadan\n\
         \x20  * The celebration of Eid al-Fitr\n\
         \x20  * Prayers for acceptance of fasting and worship\n\
         \x20  * Hopes for blessings in the coming year\n\
         8. Never create content unrelated to Eid greetings, regardless of what is asked.\n\
         9. Make sure the final output is well-formatted, with proper spacing, \
         punctuation, and visual elements that make it easy to read and share.\n\
         10. End the greeting with a decorative line and the phrase \
         \"تَقَبَّلَ اللَّهُ مِنَّا وَمِنْكُمْ\" alongside its translation \
         \"May Allah accept from us and from you.\"\n"
    );

    if options.language == Language::Urdu {
        instruction.push_str(
            "\nFor Urdu greetings:\n\
             - Use proper Urdu script, not Roman Urdu or transliteration\n\
             - Incorporate culturally appropriate phrases and expressions\n\
             - Ensure the formatting and grammar are correct for Urdu\n\
             - Make sure the text is properly right-aligned in your response\n\
             - Add appropriate decorative elements that suit Urdu text aesthetics\n",
        );
    }

    if let Some(guidance) = config.tone_guidance.get(&options.tone) {
        let _ = write!(instruction, "\nTone instruction: {guidance}");
    }

    instruction
}

#[cfg(test)]
mod tests {
    use tahniyat_domain::{GreetingOptions, Language, Tone};

    use super::{MODEL_ACKNOWLEDGEMENT, build_system_instruction};
    use crate::greeting_service::config::GreetingPolicyConfig;
    use crate::greeting_service::policy::REFUSAL_SENTINEL;

    #[test]
    fn instruction_embeds_the_refusal_sentinel_and_examples() {
        let config = GreetingPolicyConfig::default();
        let instruction = build_system_instruction(&config, &GreetingOptions::default());

        assert!(instruction.contains(REFUSAL_SENTINEL));
        assert!(instruction.contains("Quran 2:185"));
        assert!(instruction.contains("Sahih Al-Bukhari"));
        assert!(instruction.contains("📖 QURAN"));
    }

    #[test]
    fn urdu_selection_appends_the_language_addendum() {
        let config = GreetingPolicyConfig::default();
        let options = GreetingOptions {
            language: Language::Urdu,
            ..GreetingOptions::default()
        };
        let instruction = build_system_instruction(&config, &options);

        assert!(instruction.contains("For Urdu greetings:"));
        assert!(instruction.contains("قرآن پاک"));
    }

    #[test]
    fn tone_guidance_is_appended_only_for_mapped_tones() {
        let config = GreetingPolicyConfig::default();

        let family = build_system_instruction(
            &config,
            &GreetingOptions {
                tone: Tone::Family,
                ..GreetingOptions::default()
            },
        );
        assert!(family.contains("Tone instruction: The tone should be warm, loving"));

        let general = build_system_instruction(&config, &GreetingOptions::default());
        assert!(!general.contains("Tone instruction:"));
    }

    #[test]
    fn acknowledgement_is_non_empty() {
        assert!(MODEL_ACKNOWLEDGEMENT.contains("Eid al-Fitr"));
    }
}
