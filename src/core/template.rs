//! Template tokens and substitution
//!
//! Templates are plain strings with `%token%` placeholders. Each substitution
//! replaces only the first occurrence of its token; later occurrences stay as
//! literal text.

pub const TIME_TOKEN: &str = "%time%";
pub const MSG_TOKEN: &str = "%msg%";
pub const LEVEL_TOKEN: &str = "%lvl%";
pub const FIELDS_TOKEN: &str = "%fields%";
pub const KEY_TOKEN: &str = "%k%";
pub const VALUE_TOKEN: &str = "%v%";

/// Replace the first occurrence of `token` in `template`
///
/// A template without the token is returned unchanged.
///
/// ```
/// use rust_log_formatter::core::template::replace_first;
///
/// assert_eq!(replace_first("%msg% %msg%", "%msg%", "hi"), "hi %msg%");
/// assert_eq!(replace_first("plain", "%msg%", "hi"), "plain");
/// ```
#[must_use]
pub fn replace_first(template: &str, token: &str, replacement: &str) -> String {
    template.replacen(token, replacement, 1)
}
