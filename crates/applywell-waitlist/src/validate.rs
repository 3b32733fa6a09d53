//! Email shape check.

/// Longest email the input accepts; matches most providers and standards.
pub const EMAIL_MAX_LEN: usize = 254;

/// Shape check equivalent to the common `^\S+@\S+\.\S+$` pattern: no
/// whitespace anywhere, at least one character before an `@`, and after
/// the `@` a `.` with at least one character on each side.
///
/// Deliberately loose. The webhook side owns real address verification;
/// this only keeps obvious typos from burning a submit attempt.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(at) = email.find('@') else {
        return false;
    };
    if at == 0 {
        return false;
    }
    let domain = &email[at + 1..];
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
