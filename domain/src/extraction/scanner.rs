//! Locating a JSON object inside free-form model output.

use crate::core::error::ExtractionError;

/// Find the first syntactically complete top-level JSON object in `text`.
///
/// Scanning starts at the first `{` and tracks nesting depth, string
/// literals and escapes, so braces inside string values never close the
/// object early. Text around the object (prose, code fences) is ignored.
///
/// ```
/// use study_domain::extraction::find_json_object;
///
/// let raw = "Sure! ```json\n{\"label\": \"a } b\"}\n``` Hope it helps {:}";
/// assert_eq!(find_json_object(raw).unwrap(), "{\"label\": \"a } b\"}");
/// ```
pub fn find_json_object(text: &str) -> Result<&str, ExtractionError> {
    let start = text.find('{').ok_or(ExtractionError::NoJsonObject)?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    Err(ExtractionError::Unterminated)
}
