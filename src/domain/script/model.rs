use serde::{Deserialize, Serialize};

/// One exchange turn: who speaks, and what they say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub speaker: String,
    pub line: String,
}

/// An ordered two-speaker script; order is speaking order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogueScript(Vec<DialogueLine>);

/// Structural validation failure, naming the exact location and field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptValidationError {
    #[error("script is not valid JSON: {0}")]
    Syntax(String),

    #[error("script must be a JSON array of dialogue lines")]
    NotAnArray,

    #[error("line {index}: expected an object with \"speaker\" and \"line\" fields")]
    NotAnObject { index: usize },

    #[error("line {index}: missing or non-string field \"{field}\"")]
    MissingField { index: usize, field: &'static str },

    #[error("line {index}: field \"{field}\" is empty")]
    EmptyField { index: usize, field: &'static str },
}

impl DialogueScript {
    /// Parse and validate the editable JSON text form of a script.
    ///
    /// Rejects anything that is not an array of objects where every element
    /// carries non-empty string "speaker" and "line" fields. There is no
    /// silent repair; the caller keeps its prior script on failure.
    pub fn parse(text: &str) -> Result<Self, ScriptValidationError> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| ScriptValidationError::Syntax(e.to_string()))?;

        let elements = value
            .as_array()
            .ok_or(ScriptValidationError::NotAnArray)?;

        let mut lines = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            let object = element
                .as_object()
                .ok_or(ScriptValidationError::NotAnObject { index })?;

            let speaker = required_field(object, index, "speaker")?;
            let line = required_field(object, index, "line")?;

            lines.push(DialogueLine { speaker, line });
        }

        Ok(DialogueScript(lines))
    }

    /// Serialize to the editable/downloadable JSON text form.
    ///
    /// `parse(to_json_pretty(s)) == s` holds for every valid script.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).expect("script serialization cannot fail")
    }

    pub fn lines(&self) -> &[DialogueLine] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<DialogueLine>> for DialogueScript {
    fn from(lines: Vec<DialogueLine>) -> Self {
        DialogueScript(lines)
    }
}

fn required_field(
    object: &serde_json::Map<String, serde_json::Value>,
    index: usize,
    field: &'static str,
) -> Result<String, ScriptValidationError> {
    let value = object
        .get(field)
        .and_then(|v| v.as_str())
        .ok_or(ScriptValidationError::MissingField { index, field })?;

    if value.trim().is_empty() {
        return Err(ScriptValidationError::EmptyField { index, field });
    }

    Ok(value.to_string())
}
