use serde::{Deserialize, Serialize};

/// Named tone/register templates that shape the dialogue generation prompt.
///
/// A style never influences any runtime decision; it only selects the
/// instruction embedded in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStyle {
    LightAndHumorous,
    ProfessionalAndDeep,
    VividStorytelling,
    HeatedDebate,
}

impl DialogueStyle {
    pub const ALL: &'static [DialogueStyle] = &[
        DialogueStyle::LightAndHumorous,
        DialogueStyle::ProfessionalAndDeep,
        DialogueStyle::VividStorytelling,
        DialogueStyle::HeatedDebate,
    ];

    /// Short label shown in pickers and accepted back from LLM responses.
    pub fn label(&self) -> &'static str {
        match self {
            DialogueStyle::LightAndHumorous => "light and humorous",
            DialogueStyle::ProfessionalAndDeep => "professional and deep",
            DialogueStyle::VividStorytelling => "vivid storytelling",
            DialogueStyle::HeatedDebate => "heated debate",
        }
    }

    /// Instruction sentence embedded in the generation prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            DialogueStyle::LightAndHumorous => {
                "a relaxed, humorous tone, with appropriate jokes and a light touch"
            }
            DialogueStyle::ProfessionalAndDeep => {
                "a professional, in-depth tone, focused on detail and logical analysis"
            }
            DialogueStyle::VividStorytelling => {
                "a story-driven, vivid narration that pulls the listener in"
            }
            DialogueStyle::HeatedDebate => {
                "an adversarial, debate-like exchange that highlights clashing viewpoints"
            }
        }
    }

    /// Look a style up by its label, case-insensitively.
    pub fn from_label(label: &str) -> Option<DialogueStyle> {
        let normalized = label.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.label() == normalized)
    }
}

impl std::fmt::Display for DialogueStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_round_trips_every_style() {
        for style in DialogueStyle::ALL {
            assert_eq!(DialogueStyle::from_label(style.label()), Some(*style));
        }
    }

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(
            DialogueStyle::from_label("  Light And Humorous "),
            Some(DialogueStyle::LightAndHumorous)
        );
    }

    #[test]
    fn test_from_label_rejects_unknown_style() {
        assert_eq!(DialogueStyle::from_label("interpretive dance"), None);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&DialogueStyle::HeatedDebate).unwrap();
        assert_eq!(json, "\"heated_debate\"");
    }
}
