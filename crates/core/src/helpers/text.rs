//! Text helpers: email shape validation and capitalization.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld`, no whitespace, exactly one `@`, at least one dot after it.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

// Pattern is a literal; `None` only if the regex engine rejects it, in which
// case nothing validates.
static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Shape check for an email address. No DNS or RFC 5322 validation.
///
/// # Examples
///
/// ```
/// use calckit_core::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("user@example"));
/// assert!(!is_valid_email("user @example.com"));
/// ```
#[must_use]
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_REGEX
        .as_ref()
        .is_some_and(|regex| regex.is_match(text))
}

/// Upper-case the first character and leave the rest untouched.
///
/// # Examples
///
/// ```
/// use calckit_core::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("WORLD"), "WORLD");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
