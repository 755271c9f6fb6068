/*!
 * Surface-shape heuristics for token classification.
 *
 * These mirror the usual tokenizer shape flags: purely-alphabetic check,
 * numeric look, email look, and URL look. They are deliberately forgiving
 * about punctuation inside numbers (thousands separators, decimals).
 */

use std::sync::LazyLock;

use regex::Regex;

/// Digits with optional sign, thousands separators, and decimal part,
/// or a simple fraction like "3/4"
static NUMERIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+([.,]\d+)*|\d+/\d+)$").expect("Invalid numeric regex")
});

/// Email address shape: local part, @, domain with at least one dot
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// URL shape: explicit scheme, www prefix, or bare domain with a known-looking TLD
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://\S+|www\.\S+|[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+(/\S*)?)$")
        .expect("Invalid URL regex")
});

/// Number words recognized as numeric tokens
const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion",
];

/// Whether the surface form consists purely of alphabetic characters
pub fn is_alphabetic(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_alphabetic())
}

/// Whether the token looks like a number (digits or a number word)
pub fn like_num(text: &str) -> bool {
    if NUMERIC_PATTERN.is_match(text) {
        return true;
    }
    NUMBER_WORDS.contains(&text.to_lowercase().as_str())
}

/// Whether the token looks like an email address
pub fn like_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

/// Whether the token looks like a URL
pub fn like_url(text: &str) -> bool {
    // Emails and decimal numbers also match the bare-domain alternative
    if like_email(text) || NUMERIC_PATTERN.is_match(text) {
        return false;
    }
    URL_PATTERN.is_match(text)
}
