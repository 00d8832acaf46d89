const MAX_ERROR_LENGTH: usize = 2_000;
const MAX_PREVIEW_LENGTH: usize = 200;

/// Cut model output quoted inside an error message.
pub fn truncate_error(error: &str) -> String {
    truncate_chars(error, MAX_ERROR_LENGTH)
}

/// Short single-line excerpt for debug logs.
pub fn preview(text: &str) -> String {
    truncate_chars(&text.replace('\n', " "), MAX_PREVIEW_LENGTH)
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}... [truncated {} chars]", &text[..cut], text[cut..].chars().count()),
    }
}
