/// Strip Markdown code fences a model may wrap JSON output in.
///
/// Handles ```json ... ``` and bare ``` ... ``` wrappers. Anything that is
/// not fenced is returned trimmed and otherwise untouched.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim()
}
