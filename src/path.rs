//! Split/join `/a/b/c` path strings into percent-decoded segments.
use crate::codec::PercentCodec;
use crate::tokenizer::{Cursor, parse_token};

/// Splits an already-extracted, still-percent-encoded path string into
/// decoded segments.
///
/// A leading `/` is not itself a segment: `parse_path("/a/b")` yields
/// `["a", "b"]`, not `["", "a", "b"]`. A trailing `/` does produce a
/// trailing empty segment (`parse_path("/a/")` yields `["a", ""]`), which
/// is exactly the representation `format_path` needs to round-trip it.
#[must_use]
pub fn parse_path(s: &str, codec: &PercentCodec) -> Vec<String> {
    let s = s.strip_prefix('/').unwrap_or(s);
    if s.is_empty() {
        return Vec::new();
    }
    let mut cursor = Cursor::new(s);
    let mut out = Vec::new();
    loop {
        let tok = parse_token(&mut cursor, &['/']);
        out.push(codec.decode(tok, false));
        if cursor.peek() == Some('/') {
            cursor.advance();
        } else {
            break;
        }
    }
    out
}

/// Joins `segments` into a `/a/b/c` path string, encoding each segment with
/// `codec` and separating them with `/`. An empty `segments` produces an
/// empty string, not a bare `/`; callers that need a leading slash (the
/// common case for an absolute path) prepend it themselves.
pub fn format_path(out: &mut String, segments: &[String], codec: &PercentCodec) {
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        codec.encode_into(out, segment);
    }
}
