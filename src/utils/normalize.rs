use crate::types::Token;

/// Lowercases the text and replaces every non-alphabetic character with a space.
///
/// Punctuation becomes a separator rather than being dropped, so `"happy,sad"` stays two
/// words instead of merging into `"happysad"`.
pub fn clean_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphabetic() { c } else { ' ' })
        .collect()
}

/// Splits text into lowercase, purely alphabetic tokens.
///
/// # Example
/// ```
/// use emotion_sniffer::normalize;
///
/// assert_eq!(normalize("I'm SO happy!!1"), vec!["i", "m", "so", "happy"]);
/// ```
pub fn normalize(text: &str) -> Vec<Token> {
    clean_text(text)
        .split_whitespace()
        .map(|word| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_maps_separators_to_spaces() {
        assert_eq!(clean_text("Ab-c 1!"), "ab c   ");
    }

    #[test]
    fn test_punctuation_does_not_merge_words() {
        assert_eq!(normalize("happy,sad"), vec!["happy", "sad"]);
        assert_eq!(normalize("don't"), vec!["don", "t"]);
    }

    #[test]
    fn test_digits_are_separators() {
        assert_eq!(normalize("top10list"), vec!["top", "list"]);
        assert_eq!(normalize("2024"), Vec::<String>::new());
    }

    #[test]
    fn test_mixed_whitespace() {
        assert_eq!(
            normalize("  Great\tnews\n\nEVERYONE  "),
            vec!["great", "news", "everyone"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("?!... 123").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_are_kept() {
        assert_eq!(normalize("Très ÉMU"), vec!["très", "ému"]);
    }

    #[test]
    fn test_tokens_are_lowercase_alphabetic() {
        let text = "Wow!!! This_is #1 :) SO-GOOD, isn't it? 100% (really)";
        for token in normalize(text) {
            assert!(!token.is_empty());
            assert!(token.chars().all(|c| c.is_alphabetic()));
            assert_eq!(token, token.to_lowercase());
        }
    }
}
