use regex::Regex;
use std::sync::LazyLock;

static UPPERCASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])").expect("literal pattern"));
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\s]+").expect("literal pattern"));

/// Turn an identifier into a label: `exportToCsv` becomes `Export to csv`
pub fn humanize(identifier: &str) -> String {
    let split = UPPERCASE_RE.replace_all(identifier, "_$1");
    let spaced = SEPARATOR_RE.replace_all(&split, " ");
    let lowered = spaced.trim().to_lowercase();

    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("exportToCsv"), "Export to csv");
        assert_eq!(humanize("send_invoice"), "Send invoice");
        assert_eq!(humanize("Archive"), "Archive");
        assert_eq!(humanize(""), "");
    }
}
