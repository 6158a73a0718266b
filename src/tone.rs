//! The closed set of writing tones
//!
//! Five fixed tones, defined at process start. Adding a tone is a data
//! change here, not a protocol change anywhere else.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Formal,
    Casual,
    Enthusiastic,
}

/// All tones in display order.
pub const ALL_TONES: [Tone; 5] = [
    Tone::Professional,
    Tone::Friendly,
    Tone::Formal,
    Tone::Casual,
    Tone::Enthusiastic,
];

impl Tone {
    /// Stable identifier, used in prompts and in the preference store.
    pub fn id(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Friendly => "friendly",
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Enthusiastic => "enthusiastic",
        }
    }

    /// Capitalized display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Friendly => "Friendly",
            Self::Formal => "Formal",
            Self::Casual => "Casual",
            Self::Enthusiastic => "Enthusiastic",
        }
    }

    /// One-line description shown under the label.
    pub fn description(self) -> &'static str {
        match self {
            Self::Professional => "Clear, concise and business-appropriate",
            Self::Friendly => "Warm, approachable and personable",
            Self::Formal => "Respectful, sophisticated and traditional",
            Self::Casual => "Relaxed, conversational and laid-back",
            Self::Enthusiastic => "Energetic, positive and motivating",
        }
    }

    /// Look up a tone by its stable id. Unknown ids return None so callers
    /// can fall back to the default.
    pub fn from_id(id: &str) -> Option<Self> {
        ALL_TONES.iter().copied().find(|t| t.id() == id)
    }

    /// Next tone in display order, wrapping around.
    pub fn next(self) -> Self {
        let idx = ALL_TONES.iter().position(|&t| t == self).unwrap_or(0);
        ALL_TONES[(idx + 1) % ALL_TONES.len()]
    }

    /// Previous tone in display order, wrapping around.
    pub fn prev(self) -> Self {
        let idx = ALL_TONES.iter().position(|&t| t == self).unwrap_or(0);
        ALL_TONES[(idx + ALL_TONES.len() - 1) % ALL_TONES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for tone in ALL_TONES {
            assert_eq!(Tone::from_id(tone.id()), Some(tone));
        }
        assert_eq!(Tone::from_id("sarcastic"), None);
        assert_eq!(Tone::from_id(""), None);
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Tone::Enthusiastic.next(), Tone::Professional);
        assert_eq!(Tone::Professional.prev(), Tone::Enthusiastic);

        let mut tone = Tone::Professional;
        for _ in 0..ALL_TONES.len() {
            tone = tone.next();
        }
        assert_eq!(tone, Tone::Professional);
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrap {
            tone: Tone,
        }

        let toml = toml::to_string(&Wrap {
            tone: Tone::Friendly,
        })
        .unwrap();
        assert!(toml.contains("\"friendly\""));

        let parsed: Wrap = toml::from_str("tone = \"enthusiastic\"").unwrap();
        assert_eq!(parsed.tone, Tone::Enthusiastic);
    }
}
