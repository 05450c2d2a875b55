//! Article text cleanup and tokenization.

// Allow unwrap for the compile-time constant regex pattern
#![allow(clippy::unwrap_used)]

use regex::Regex;

lazy_static::lazy_static! {
    // Non-greedy so adjacent tags are removed one at a time.
    static ref HTML_TAG_RE: Regex = Regex::new(r"<.*?>").unwrap();
}

/// Remove HTML tags from a string.
pub fn clean_html(raw_html: &str) -> String {
    HTML_TAG_RE.replace_all(raw_html, "").into_owned()
}

/// Split text into lowercase words, keeping only purely alphanumeric tokens.
///
/// Tokens carrying punctuation (`"word,"`, `"it's"`) are dropped rather than
/// trimmed.
pub fn generate_word_list(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|token| token.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Strip tags and tokenize in one step.
pub fn words_from_html(raw_html: &str) -> Vec<String> {
    generate_word_list(&clean_html(raw_html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_html_strips_tags() {
        assert_eq!(
            clean_html("<p>Hello <b>bold</b> world</p>"),
            "Hello bold world"
        );
    }

    #[test]
    fn test_clean_html_keeps_plain_text() {
        assert_eq!(clean_html("no tags here"), "no tags here");
    }

    #[test]
    fn test_clean_html_tag_attributes() {
        assert_eq!(
            clean_html(r#"<a href="https://example.com">link</a>"#),
            "link"
        );
    }

    #[test]
    fn test_generate_word_list_filters_and_lowercases() {
        let words = generate_word_list("The Quick, brown fox's 42 JUMPS");
        assert_eq!(words, vec!["the", "brown", "42", "jumps"]);
    }

    #[test]
    fn test_generate_word_list_handles_newlines_and_tabs() {
        let words = generate_word_list("one\ntwo\t\tthree  four");
        assert_eq!(words, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_generate_word_list_drops_non_ascii() {
        assert_eq!(generate_word_list("café au lait"), vec!["au", "lait"]);
    }

    #[test]
    fn test_words_from_html_never_yields_empty_words() {
        let words = words_from_html("<p></p> <br/> <div>Read</div> <i>fast</i>");
        assert_eq!(words, vec!["read", "fast"]);
        assert!(words.iter().all(|w| !w.is_empty()));
    }
}
