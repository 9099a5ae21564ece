//! Quote-aware CSV line tokenizing.

/// Splits one CSV line into trimmed fields, honoring double-quoted
/// sections that may contain commas.
///
/// Quote characters toggle the in-quotes state and are never copied into
/// field content, so a doubled quote (`""`) contributes no characters
/// rather than unescaping to a literal `"`. The returned vector always has
/// at least one element: one field per unquoted comma, plus one.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
