//! Extraction of the JSON object embedded in the model's free-text reply.
//!
//! The model is asked for JSON-shaped output but frequently wraps it in
//! prose or code fences. The scanner below finds the first top-level
//! `{...}` by tracking brace depth, staying aware of string literals and
//! escapes so nested objects and braces inside strings do not mis-slice.

/// Returns the first balanced top-level JSON object in `text`, or `None`
/// when no opening brace exists or the braces never balance.
pub fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }

    None
}
