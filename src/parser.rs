//! Intent extraction from free-text messages.

use regex::RegexBuilder;

/// True when `@handle` appears anywhere in the text, case-insensitive.
pub fn is_mentioned(text: &str, handle: &str) -> bool {
    text.to_lowercase()
        .contains(&format!("@{}", handle.to_lowercase()))
}

/// Extract a candidate question number from a message.
///
/// Patterns are tried in priority order and the first match wins, so a
/// handle-prefixed number always beats a stray number elsewhere in the text:
/// `@handle 1`, `handle 1`, `@handle1`, then a bare number anywhere.
pub fn extract_question_id(text: &str, handle: &str) -> Option<String> {
    let handle = regex::escape(handle);
    let patterns = [
        format!(r"@{handle}\s+(\d+)"),
        format!(r"{handle}\s+(\d+)"),
        format!(r"@{handle}\s*(\d+)"),
        r"(\d+)".to_string(),
    ];

    patterns
        .iter()
        .filter_map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .ok()
        })
        .find_map(|re| re.captures(text).map(|caps| caps[1].to_string()))
}
