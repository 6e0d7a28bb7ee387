/// Splits a `?search=` value into terms.
///
/// Commas and whitespace both separate terms; NUL bytes are dropped.
pub fn search_terms(raw: &str) -> Vec<String> {
    raw.replace('\0', "")
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
