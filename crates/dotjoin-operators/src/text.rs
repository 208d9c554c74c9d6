//! String helpers.

/// Upper-case the first character, leaving the rest unchanged.
///
/// Uses full Unicode case mapping, so the first character may expand
/// (`"ßa"` becomes `"SSa"`).
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes() {
        assert_eq!(capitalize_first("test"), "Test");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("Already"), "Already");
        assert_eq!(capitalize_first("éclair au chocolat"), "Éclair au chocolat");
        assert_eq!(capitalize_first("ßa"), "SSa");
        assert_eq!(capitalize_first("1abc"), "1abc");
    }
}
