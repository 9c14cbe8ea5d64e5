#![cfg(feature = "serde")]
use uriref::{NameValuePair, Uri};

#[test]
fn uri_round_trips_through_json_as_its_string_form() {
    let uri = Uri::parse("https://example.com/a/b?x=1&y=2#frag").unwrap();
    let json = serde_json::to_string(&uri).unwrap();
    assert_eq!(json, "\"https://example.com/a/b?x=1&y=2#frag\"");
    let back: Uri = serde_json::from_str(&json).unwrap();
    assert_eq!(back, uri);
}

#[test]
fn malformed_uri_json_fails_to_deserialize() {
    let err = serde_json::from_str::<Uri>("\"not-a-uri\"");
    assert!(err.is_err());
}

#[test]
fn name_value_pair_round_trips_through_json() {
    let pair = NameValuePair::new("q", Some("hello world".to_string()));
    let json = serde_json::to_string(&pair).unwrap();
    let back: NameValuePair = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pair);
}

#[test]
fn name_value_pair_with_no_value_round_trips() {
    let pair = NameValuePair::new("flag", None);
    let json = serde_json::to_string(&pair).unwrap();
    let back: NameValuePair = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pair);
}
