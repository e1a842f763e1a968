const MAX_VISIBLE_CHARS: usize = 60;

/// Shortened, redacted form of user text for log fields.
///
/// Truncation counts characters, not bytes, so Devanagari or Tamil input never
/// splits inside a code point.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let preview = if total > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total)
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&preview)
}

fn redact_sensitive_patterns(text: &str) -> String {
    const PATTERNS: [&str; 4] = ["Bearer ", "api_key=", "password=", "token="];
    const MASK: &str = "[REDACTED]";

    let mut result = text.to_string();
    for pattern in PATTERNS {
        let mut cursor = 0;
        while let Some(offset) = result[cursor..].find(pattern) {
            let value_start = cursor + offset + pattern.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map_or(result.len(), |i| value_start + i);
            result.replace_range(value_start..value_end, MASK);
            cursor = value_start + MASK.len();
        }
    }

    result
}
