use regex::Regex;
use std::sync::LazyLock;

/// Local part, `@`, domain, `.`, top-level domain; no whitespace and a single `@`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
