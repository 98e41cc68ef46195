use serde::{Deserialize, Serialize};

use super::style::DialogueStyle;
use super::voice::VoiceId;

/// One podcast speaker: a display name paired with a catalog voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub voice: VoiceId,
}

/// The two speakers and the dialogue style of one session.
///
/// Fixed at script generation time; synthesis maps each script line back to
/// one of these two voices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cast {
    pub speakers: [Speaker; 2],
    pub style: DialogueStyle,
}

impl Cast {
    /// Baked-in cast used whenever the recommendation step cannot deliver.
    pub fn default_cast() -> Cast {
        Cast {
            speakers: [
                Speaker {
                    name: "Alice".to_string(),
                    voice: VoiceId::parse("female-shaonv").expect("default voice in catalog"),
                },
                Speaker {
                    name: "Bob".to_string(),
                    voice: VoiceId::parse("male-qn-qingse").expect("default voice in catalog"),
                },
            ],
            style: DialogueStyle::LightAndHumorous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cast_is_alice_and_bob() {
        let cast = Cast::default_cast();
        assert_eq!(cast.speakers[0].name, "Alice");
        assert_eq!(cast.speakers[0].voice.as_str(), "female-shaonv");
        assert_eq!(cast.speakers[1].name, "Bob");
        assert_eq!(cast.speakers[1].voice.as_str(), "male-qn-qingse");
        assert_eq!(cast.style, DialogueStyle::LightAndHumorous);
    }
}
