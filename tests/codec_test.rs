use uriref::{Charset, PercentCodec};

#[test]
fn encode_ascii_round_trips_through_safe_set() {
    let codec = PercentCodec::RFC3986;
    let s = "abcABC019-._~";
    assert_eq!(codec.decode(&codec.encode(s), false), s);
}

#[test]
fn encode_utf8_round_trips() {
    let codec = PercentCodec::RFC3986;
    let s = "Gödel, Café, 日本語";
    assert_eq!(codec.decode(&codec.encode(s), false), s);
}

#[test]
fn encode_uses_uppercase_hex() {
    let codec = PercentCodec::RFC3986;
    assert_eq!(codec.encode("Gödel"), "G%C3%B6del");
}

#[test]
fn decode_basic() {
    let codec = PercentCodec::RFC3986;
    assert_eq!(codec.decode("G%C3%B6del", false), "Gödel");
}

#[test]
fn decode_malformed_escape_passes_through_literally() {
    let codec = PercentCodec::RFC3986;
    assert_eq!(codec.decode("a%ZZb", false), "a%ZZb");
}

#[test]
fn decode_percent_near_end_of_input_passes_through() {
    let codec = PercentCodec::RFC3986;
    assert_eq!(codec.decode("abc%2", false), "abc%2");
    assert_eq!(codec.decode("abc%", false), "abc%");
}

#[test]
fn blank_as_plus_and_plus_as_blank_round_trip() {
    let codec = PercentCodec::RFC3986.with_blank_as_plus(true);
    let encoded = codec.encode("hello world");
    assert_eq!(encoded, "hello+world");
    assert_eq!(codec.decode(&encoded, true), "hello world");
}

#[test]
fn literal_plus_is_untouched_when_plus_as_blank_is_false() {
    let codec = PercentCodec::RFC3986;
    assert_eq!(codec.decode("a+b", false), "a+b");
}

#[test]
fn rfc5987_preset_allows_backtick_and_pipe() {
    let codec = PercentCodec::RFC5987;
    assert_eq!(codec.encode("a`b|c"), "a`b|c");
}

#[test]
fn charset_defaults_to_utf8() {
    let codec = PercentCodec::with_safe(uriref::UNRESERVED);
    assert_eq!(codec.charset, Charset::Utf8);
}
