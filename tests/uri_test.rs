use std::str::FromStr;
use uriref::{Uri, UriBuilder, UriSyntaxError};

#[test]
fn parse_builds_directly_into_a_uri() {
    let uri = Uri::parse("https://example.com/path?q=1#frag").unwrap();
    assert_eq!(uri.scheme(), Some("https"));
    assert_eq!(uri.host(), Some("example.com"));
    assert_eq!(uri.path().as_deref(), Some("/path"));
    assert_eq!(uri.fragment(), Some("frag"));
}

#[test]
fn missing_scheme_is_a_syntax_error() {
    assert_eq!(Uri::parse("not-a-uri"), Err(UriSyntaxError::MissingScheme));
}

#[test]
fn scheme_with_an_invalid_leading_character_is_a_syntax_error() {
    assert_eq!(Uri::parse("1http://example.com"), Err(UriSyntaxError::InvalidScheme));
}

#[test]
fn display_round_trips_the_original_text() {
    let text = "https://example.com/a/b?x=1&y=2#frag";
    let uri = Uri::parse(text).unwrap();
    assert_eq!(uri.to_string(), text);
}

#[test]
fn from_str_is_equivalent_to_parse() {
    let a = Uri::parse("https://example.com/a").unwrap();
    let b = Uri::from_str("https://example.com/a").unwrap();
    assert_eq!(a, b);
}

#[test]
fn to_builder_round_trips_and_allows_edits() {
    let uri = Uri::parse("https://example.com/a").unwrap();
    let edited = uri.to_builder().set_fragment("top").build().unwrap();
    assert_eq!(edited.to_string(), "https://example.com/a#top");
}

#[test]
fn equality_is_based_on_serialized_form() {
    let a = UriBuilder::new()
        .set_scheme("http")
        .set_host("h")
        .build()
        .unwrap();
    let b = Uri::parse("http://h").unwrap();
    assert_eq!(a, b);
}

#[test]
fn ipv6_host_with_port_and_no_path_round_trips() {
    let uri = UriBuilder::new()
        .set_host("::1")
        .set_scheme("http")
        .set_port(Some(80))
        .build()
        .unwrap();
    assert_eq!(uri.to_string(), "http://[::1]:80");
}
