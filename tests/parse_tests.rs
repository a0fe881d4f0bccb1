//! Tests for protocol detection, default prepending, and parse failures.

use connurl::*;

#[test]
fn test_parse_schemeless_applies_default() {
    let url = parse("google.com").unwrap();

    assert_eq!(url.scheme.as_deref(), Some("https"));
    assert_eq!(url.host.as_deref(), Some("google.com"));
    assert!(url.port.is_none());
    assert!(url.user.is_none());
    assert!(url.pass.is_none());
    assert!(url.path.is_none());
    assert!(url.query.is_none());
    assert!(url.fragment.is_none());
}

#[test]
fn test_parse_known_prefix_goes_through_unmodified() {
    // Every entry of the default list keeps its own scheme, no matter what
    // the default protocol is.
    for protocol in DEFAULT_PROTOCOLS {
        let input = format!("{protocol}example.com");
        let url = parse_with(&input, "custom://", &[]).unwrap();

        let scheme = protocol.trim_end_matches("://");
        assert_eq!(
            url.scheme.as_deref(),
            Some(scheme),
            "scheme mismatch for: {input}"
        );
        assert_eq!(
            url.host.as_deref(),
            Some("example.com"),
            "host mismatch for: {input}"
        );
    }
}

#[test]
fn test_parse_prepends_default_verbatim() {
    let prepended = parse_with("example.com/path?q=1", "https://", &[]).unwrap();
    let direct =
        ParsedUrl::from_map(split_components("https://example.com/path?q=1").unwrap());

    assert_eq!(prepended, direct);
}

#[test]
fn test_parse_with_custom_protocol_list() {
    // No entry matches: the default protocol is prepended.
    let url = parse_with("example.com", "https://", &["custom://"]).unwrap();
    assert_eq!(url.scheme.as_deref(), Some("https"));
    assert_eq!(url.host.as_deref(), Some("example.com"));

    // A custom entry matches: the input is parsed as-is.
    let url = parse_with("custom://example.com", "https://", &["custom://"]).unwrap();
    assert_eq!(url.scheme.as_deref(), Some("custom"));
    assert_eq!(url.host.as_deref(), Some("example.com"));

    // A custom default protocol is prepended when nothing matches.
    let url = parse_with("example.com", "custom://", &["custom://"]).unwrap();
    assert_eq!(url.scheme.as_deref(), Some("custom"));
    assert_eq!(url.host.as_deref(), Some("example.com"));
}

#[test]
fn test_parse_matched_prefix_beats_differing_default() {
    // Presence of any known protocol gates prepending, not whether the
    // protocol equals the default.
    let url = parse_with("ftp://example.com", "https://", &[]).unwrap();
    assert_eq!(url.scheme.as_deref(), Some("ftp"));
}

#[test]
fn test_parse_explicit_default_port_is_kept() {
    let url = parse("https://host.com:443/path").unwrap();
    assert_eq!(url.port, Some(443));

    let url = parse("https://host.com/path").unwrap();
    assert_eq!(url.port, None);
}

#[test]
fn test_parse_ipv6_host() {
    let url = parse("https://[::1]:8080/status").unwrap();

    assert_eq!(url.host.as_deref(), Some("[::1]"));
    assert_eq!(url.port, Some(8080));
    assert_eq!(url.path.as_deref(), Some("/status"));
}

#[test]
fn test_parse_malformed_inputs() {
    let cases = vec!["", "https://", "https://example.com:999999"];

    for input in cases {
        let result = parse(input);
        assert!(
            matches!(result, Err(UrlError::MalformedUrl(_))),
            "expected MalformedUrl for: {input:?}"
        );
    }
}

#[test]
fn test_format_then_parse_round_trip() {
    let cases = vec![
        ("ssl", "example.com", 443u16),
        ("https", "example.com", 443),
        ("tcp", "broker.internal", 1883),
    ];

    for (scheme, host, port) in cases {
        let url = ParsedUrl::new()
            .set_scheme(Some(scheme))
            .set_host(Some(host))
            .set_port(Some(port));

        let formatted = url.to_protocol(None, None);
        let reparsed = parse(&formatted).unwrap();

        assert_eq!(reparsed.scheme.as_deref(), Some(scheme), "scheme lost for: {formatted}");
        assert_eq!(reparsed.host.as_deref(), Some(host), "host lost for: {formatted}");
        assert_eq!(reparsed.port, Some(port), "port lost for: {formatted}");
    }
}

#[test]
fn test_has_protocol_early_exit_semantics() {
    assert!(has_protocol("https://example.com", &DEFAULT_PROTOCOLS));
    assert!(!has_protocol("example.com", &DEFAULT_PROTOCOLS));

    // Empty entries never match, including against an empty input.
    assert!(!has_protocol("example.com", &["", ""]));
    assert!(has_protocol("tcp://example.com", &["", "tcp://"]));
}
