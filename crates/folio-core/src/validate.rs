use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Intentionally loose: one @, no whitespace, a dot somewhere in the
    // domain part. Deliverability is the mail server's problem.
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Check that a contact address looks like an email
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_RE.is_match(address)
}
