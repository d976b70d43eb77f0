//! Markdown fence stripping.

/// Strip a single surrounding fenced-code block from generated text.
///
/// If the first line starts with a fence marker it is dropped, along with
/// the last line when that is a fence marker too. Inner fence lines are left
/// alone. Idempotent on already-clean text.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    let mut lines: Vec<&str> = trimmed.lines().collect();
    // Drop the leading ```lang or ``` line
    lines.remove(0);
    if let Some(last) = lines.last() {
        if last.trim().starts_with("```") {
            lines.pop();
        }
    }
    lines.join("\n").trim().to_string()
}
