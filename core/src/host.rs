//! Syntax check for HTTP `Host` header values.
//!
//! A value is a dot-separated list of labels with an optional `:port`. Each
//! label is ASCII letters, digits and hyphens, and must start and end with a
//! letter or digit. This covers hostnames and IPv4 literals. Bracketed IPv6
//! literals are not accepted.

use std::sync::LazyLock;

use regex::Regex;

const LABEL: &str = "[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?";

static HOST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"^{LABEL}(?:\.{LABEL})*(?::[0-9]+)?$");
    Regex::new(&pattern).expect("host pattern is a valid regex")
});

/// Returns `true` if `value` is a syntactically valid `Host` header value.
pub fn is_valid_host(value: &str) -> bool {
    HOST_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_host_with_port() {
        assert!(is_valid_host("localhost:1234"));
        assert!(is_valid_host("www.w3.org:3456"));
    }

    #[test]
    fn accepts_single_character_labels() {
        assert!(is_valid_host("a"));
        assert!(is_valid_host("a.1.b.2"));
    }

    #[test]
    fn rejects_trailing_hyphen() {
        assert!(!is_valid_host("host-"));
        assert!(!is_valid_host("host-.local"));
    }

    #[test]
    fn rejects_trailing_dot_and_colon() {
        assert!(!is_valid_host("host.local."));
        assert!(!is_valid_host("localhost:"));
    }

    #[test]
    fn rejects_trailing_newline() {
        assert!(!is_valid_host("localhost\n"));
    }

    #[test]
    fn rejects_ipv6_literal() {
        assert!(!is_valid_host("[::1]"));
        assert!(!is_valid_host("[::1]:8080"));
    }

    #[test]
    fn rejects_non_ascii_digits_in_port() {
        assert!(!is_valid_host("localhost:١٢٣"));
    }

    #[test]
    fn repeated_checks_agree() {
        for value in ["localhost", "bad:port", ""] {
            assert_eq!(is_valid_host(value), is_valid_host(value));
        }
    }
}
