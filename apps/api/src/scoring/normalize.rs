//! Text normalization for lexical matching.
//!
//! One pass, allowlist-based: every character that is not an ASCII letter,
//! digit, or whitespace is removed, and the survivors are lowercased.
//! Non-ASCII input is therefore stripped, never rejected.

/// Canonicalizes raw extracted text for matching.
///
/// Total over all string inputs and idempotent — normalizing an already
/// normalized string is a no-op.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_lowercases() {
        assert_eq!(
            normalize("Senior Engineer (Rust/C++), 5+ yrs!"),
            "senior engineer rustc 5 yrs"
        );
    }

    #[test]
    fn test_whitespace_is_preserved() {
        assert_eq!(normalize("a\tb\nc d"), "a\tb\nc d");
    }

    #[test]
    fn test_non_ascii_is_stripped_not_rejected() {
        assert_eq!(normalize("café résumé"), "caf rsum");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Experienced Python developer with AWS & Docker skills.",
            "ALL CAPS!!!",
            "  mixed   spacing \n and \t tabs ",
            "数字 and symbols ©®",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
