//! Table-driven checks of which `Host` header values a request accepts.
//!
//! Every rejection must report `value` as the failing argument so callers can
//! tell a bad Host header apart from other argument errors.

use rest_core::{is_valid_host, ParameterKind, RestRequest};

const INVALID_HOSTS: &[&str] = &[
    "http://localhost",
    "hostname 1234",
    "-leading.hyphen.not.allowed",
    "bad:port",
    " no.leading.white-space",
    "no.trailing.white-space ",
    ".leading.dot.not.allowed",
    "double.dots..not.allowed",
    ".",
    ".:2345",
    ":5678",
    "",
    "foo:bar:baz",
];

const VALID_HOSTS: &[&str] = &[
    "localhost",
    "localhost:1234",
    "host.local",
    "anotherhost.local:2345",
    "www.w3.org",
    "www.w3.org:3456",
    "8.8.8.8",
    "a.1.b.2",
    "10.20.30.40:1234",
    "0host",
    "hypenated-hostname",
    "multi--hyphens",
];

#[test]
fn cannot_set_invalid_host_header() {
    for value in INVALID_HOSTS {
        let mut request = RestRequest::new(None);
        let err = request
            .add_header("Host", value)
            .expect_err(&format!("{value:?} should be rejected"));
        assert_eq!(err.param(), Some("value"), "{value:?}: failing argument");
        assert!(request.parameters().is_empty(), "{value:?}: nothing inserted");
    }
}

#[test]
fn can_set_valid_host_header() {
    for value in VALID_HOSTS {
        let mut request = RestRequest::new(None);
        request
            .add_header("Host", value)
            .unwrap_or_else(|e| panic!("{value:?} should be accepted: {e}"));
        let param = request.find_parameter("Host").unwrap();
        assert_eq!(param.value, *value);
        assert_eq!(param.kind, ParameterKind::Header);
    }
}

#[test]
fn other_header_names_accept_invalid_host_values() {
    for value in INVALID_HOSTS {
        let mut request = RestRequest::new(None);
        request
            .add_header("X-Forwarded-Host", value)
            .unwrap_or_else(|e| panic!("{value:?} should be accepted: {e}"));
    }
}

#[test]
fn validation_is_deterministic() {
    for value in INVALID_HOSTS.iter().chain(VALID_HOSTS) {
        let first = is_valid_host(value);
        assert_eq!(first, is_valid_host(value), "{value:?}");
        assert_eq!(first, VALID_HOSTS.contains(value), "{value:?}");
    }
}
