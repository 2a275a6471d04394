const MAX_VISIBLE_CHARS: usize = 300;
const REDACTED: &str = "[REDACTED]";

const SECRET_MARKERS: [&str; 6] = [
    "Bearer ",
    "api_key=",
    "key=",
    "xi-api-key: ",
    "api-subscription-key: ",
    "token=",
];

/// Makes a vendor error body or transport error safe to return and log:
/// truncates long bodies and redacts anything that looks like a credential.
pub fn sanitize_vendor_message(message: &str) -> String {
    let trimmed = message.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total_chars)
    } else {
        trimmed.to_string()
    };

    redact_secrets(&visible)
}

fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();

    for marker in SECRET_MARKERS {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(marker) {
            let value_start = search_from + found + marker.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\'' | ')' | ','))
                .map(|i| value_start + i)
                .unwrap_or(result.len());

            if value_end > value_start && &result[value_start..value_end] != REDACTED {
                result.replace_range(value_start..value_end, REDACTED);
                search_from = value_start + REDACTED.len();
            } else {
                search_from = value_end;
            }
        }
    }

    result
}
