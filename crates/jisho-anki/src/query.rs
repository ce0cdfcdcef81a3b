/// Search query matching notes of `note_type` whose `field` is exactly `value`
pub fn field_query(note_type: &str, field: &str, value: &str) -> String {
    format!(
        "\"note:{}\" \"{}:{}\"",
        escape(note_type),
        escape(field),
        escape(value)
    )
}

// Quotes and backslashes end or escape the term, `*` and `_` are wildcards
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '"' | '*' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
