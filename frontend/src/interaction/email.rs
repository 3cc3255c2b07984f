use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Loose `local@domain.tld` check.
pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last@mail.example.com"));
        assert!(validate_email("x@y..z"));
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "plain", "@b.co", "a@", "a@b", "a@.co", "a@co.", "a@@b.co", "a@b@c.co", "a b@c.co", "a@b.c o"] {
            assert!(!validate_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_rejects_unicode_whitespace() {
        assert!(!validate_email("a\u{a0}b@c.co"));
        assert!(!validate_email("ab@c.c\u{2003}"));
    }
}
