//! Split/join `k=v&k=v` query strings with per-slot percent decoding.
use crate::codec::PercentCodec;
use crate::tokenizer::{Cursor, parse_token};

/// One `name=value` (or bare `name`) query entry. Order-preserving; plays
/// the role spec.md calls an "opaque" name-value-pair collaborator.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameValuePair {
    pub name: String,
    pub value: Option<String>,
}

impl NameValuePair {
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Parses an already-extracted, still-percent-encoded query string into
/// name/value pairs, decoding each piece with `codec`.
///
/// A pair whose name is empty after tokenizing (e.g. `=d` in `a=1&b=&c&=d`)
/// is dropped, not emitted with an empty name. A value is `None` when no
/// `=` followed the name at all (`c` in that example), and `Some("")` when
/// `=` was present with nothing after it (`b=`).
#[must_use]
pub fn parse_query(s: &str, codec: &PercentCodec, plus_as_blank: bool) -> Vec<NameValuePair> {
    if s.is_empty() {
        return Vec::new();
    }
    let mut cursor = Cursor::new(s);
    let mut out = Vec::new();
    while !cursor.at_end() {
        let name_tok = parse_token(&mut cursor, &['=', '&']);
        let value = if cursor.peek() == Some('=') {
            cursor.advance();
            let value_tok = parse_token(&mut cursor, &['&']);
            Some(codec.decode(value_tok, plus_as_blank))
        } else {
            None
        };
        if cursor.peek() == Some('&') {
            cursor.advance();
        }
        if !name_tok.is_empty() {
            out.push(NameValuePair::new(codec.decode(name_tok, plus_as_blank), value));
        }
    }
    out
}

/// Joins `params` into a `k=v&k=v` string, encoding each name/value with
/// `codec`. A pair with `value: None` is emitted as a bare name with no
/// `=`.
pub fn format_query(out: &mut String, params: &[NameValuePair], codec: &PercentCodec) {
    for (i, pair) in params.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        codec.encode_into(out, &pair.name);
        if let Some(value) = &pair.value {
            out.push('=');
            codec.encode_into(out, value);
        }
    }
}
