use serde::{Deserialize, Serialize};

/// One entry of the synthesis provider's pre-built voice catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceEntry {
    pub label: &'static str,
    pub id: &'static str,
}

/// Fixed catalog of Minimax voice identifiers selectable in the UI.
pub const VOICE_CATALOG: &[VoiceEntry] = &[
    VoiceEntry { label: "Youthful male", id: "male-qn-qingse" },
    VoiceEntry { label: "Elite young male", id: "male-qn-jingying" },
    VoiceEntry { label: "Domineering young male", id: "male-qn-badao" },
    VoiceEntry { label: "College student male", id: "male-qn-daxuesheng" },
    VoiceEntry { label: "Young girl", id: "female-shaonv" },
    VoiceEntry { label: "Elegant female", id: "female-yujie" },
    VoiceEntry { label: "Mature female", id: "female-chengshu" },
    VoiceEntry { label: "Sweet female", id: "female-tianmei" },
    VoiceEntry { label: "Male presenter", id: "presenter_male" },
    VoiceEntry { label: "Female presenter", id: "presenter_female" },
    VoiceEntry { label: "Male audiobook narrator 1", id: "audiobook_male_1" },
    VoiceEntry { label: "Male audiobook narrator 2", id: "audiobook_male_2" },
    VoiceEntry { label: "Female audiobook narrator 1", id: "audiobook_female_1" },
    VoiceEntry { label: "Female audiobook narrator 2", id: "audiobook_female_2" },
    VoiceEntry { label: "Youthful male (beta)", id: "male-qn-qingse-jingpin" },
    VoiceEntry { label: "Elite young male (beta)", id: "male-qn-jingying-jingpin" },
    VoiceEntry { label: "Domineering young male (beta)", id: "male-qn-badao-jingpin" },
    VoiceEntry { label: "College student male (beta)", id: "male-qn-daxuesheng-jingpin" },
    VoiceEntry { label: "Young girl (beta)", id: "female-shaonv-jingpin" },
    VoiceEntry { label: "Elegant female (beta)", id: "female-yujie-jingpin" },
    VoiceEntry { label: "Mature female (beta)", id: "female-chengshu-jingpin" },
    VoiceEntry { label: "Sweet female (beta)", id: "female-tianmei-jingpin" },
    VoiceEntry { label: "Clever boy", id: "clever_boy" },
    VoiceEntry { label: "Cute boy", id: "cute_boy" },
    VoiceEntry { label: "Lovely girl", id: "lovely_girl" },
    VoiceEntry { label: "Cartoon pig", id: "cartoon_pig" },
    VoiceEntry { label: "Clingy younger brother", id: "bingjiao_didi" },
    VoiceEntry { label: "Handsome boyfriend", id: "junlang_nanyou" },
    VoiceEntry { label: "Innocent junior", id: "chunzhen_xuedi" },
    VoiceEntry { label: "Aloof senior", id: "lengdan_xiongzhang" },
    VoiceEntry { label: "Domineering heir", id: "badao_shaoye" },
    VoiceEntry { label: "Sweetheart girl", id: "tianxin_xiaoling" },
    VoiceEntry { label: "Playful girl", id: "qiaopi_mengmei" },
    VoiceEntry { label: "Charming lady", id: "wumei_yujie" },
    VoiceEntry { label: "Coquettish junior girl", id: "diadia_xuemei" },
    VoiceEntry { label: "Graceful senior girl", id: "danya_xuejie" },
];

/// A voice identifier validated against [`VOICE_CATALOG`].
///
/// Serde round-trips through the raw identifier string, so deserializing an
/// unknown voice fails instead of smuggling it through to the synthesis API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VoiceId(String);

impl VoiceId {
    pub fn parse(id: &str) -> Result<Self, UnknownVoice> {
        if VOICE_CATALOG.iter().any(|entry| entry.id == id) {
            Ok(VoiceId(id.to_string()))
        } else {
            Err(UnknownVoice(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown voice identifier: {0}")]
pub struct UnknownVoice(pub String);

impl TryFrom<String> for VoiceId {
    type Error = UnknownVoice;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        VoiceId::parse(&value)
    }
}

impl From<VoiceId> for String {
    fn from(voice: VoiceId) -> Self {
        voice.0
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
