//! Prompt construction for the generation endpoint

use crate::tone::Tone;

/// Render the generation prompt for a rewrite attempt.
///
/// The format is fixed and doubles as the user-visible prompt preview:
/// what is shown is exactly what is sent, with no hidden instructions
/// appended later.
pub fn build_prompt(tone: Tone, source_text: &str) -> String {
    format!(
        "Rewrite the following email with a {} tone: \"{}\"",
        tone.id(),
        source_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::ALL_TONES;

    #[test]
    fn test_template_matches_exactly() {
        assert_eq!(
            build_prompt(Tone::Friendly, "Hi team, send the report."),
            "Rewrite the following email with a friendly tone: \"Hi team, send the report.\""
        );
    }

    #[test]
    fn test_template_holds_for_every_tone() {
        for tone in ALL_TONES {
            let prompt = build_prompt(tone, "Hello");
            assert_eq!(
                prompt,
                format!(
                    "Rewrite the following email with a {} tone: \"Hello\"",
                    tone.id()
                )
            );
        }
    }

    #[test]
    fn test_source_text_is_not_escaped() {
        // Embedded quotes and newlines pass through untouched.
        let prompt = build_prompt(Tone::Casual, "She said \"ok\"\nbye");
        assert_eq!(
            prompt,
            "Rewrite the following email with a casual tone: \"She said \"ok\"\nbye\""
        );
    }
}
