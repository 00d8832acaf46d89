use serde_json::Value;
use crate::errors::ObserverError;
use crate::utils::truncation::truncate_error;

/// Find the first balanced `{...}` object in `text` that parses as JSON.
///
/// Braces inside JSON string literals are ignored while scanning. A candidate
/// that never closes or does not parse (prose like `{x}`) is skipped and the
/// scan resumes at the next opening brace.
pub fn extract_json_object(text: &str) -> Result<Value, ObserverError> {
    let mut search_from = 0;
    let mut last_error = None;

    while let Some(offset) = text[search_from..].find('{') {
        let start = search_from + offset;
        if let Some(len) = balanced_end(&text[start..]) {
            let candidate = &text[start..start + len];
            match serde_json::from_str::<Value>(candidate) {
                Ok(value @ Value::Object(_)) => return Ok(value),
                Ok(_) => {}
                Err(e) => last_error = Some(e.to_string()),
            }
        }
        search_from = start + 1;
    }

    Err(ObserverError::Parse(match last_error {
        Some(e) => format!("no well-formed JSON object in reply ({}): {}", e, truncate_error(text)),
        None => format!("no JSON object in reply: {}", truncate_error(text)),
    }))
}

/// Byte length of the balanced brace group at the start of `text`, which
/// must begin with `{`. `None` when the group never closes.
fn balanced_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}
