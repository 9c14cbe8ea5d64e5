//! Byte-accurate percent-encoding and decoding (RFC 3986 section 2.1).
use crate::char_class::{CharClass, RFC5987_UNRESERVED, UNRESERVED};
use crate::charset::Charset;

const HEX_DIGITS: [u8; 16] = *b"0123456789ABCDEF";

fn hex_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// A percent-codec bound to one safe-character set, one charset, and a
/// `+`/space encoding policy.
///
/// `+`/space substitution only ever applies on the *encode* side here; the
/// corresponding decode-side policy (`plus_as_blank`) is independent and
/// passed per call, since `UriBuilder` can flip it on an already-cached
/// query string (see `set_plus_as_blank`) without touching the codec.
#[derive(Clone, Copy, Debug)]
pub struct PercentCodec {
    pub safe: CharClass,
    pub charset: Charset,
    pub blank_as_plus: bool,
}

impl PercentCodec {
    /// `safe = UNRESERVED`, UTF-8, no `+` substitution.
    pub const RFC3986: PercentCodec = PercentCodec {
        safe: UNRESERVED,
        charset: Charset::Utf8,
        blank_as_plus: false,
    };

    /// `safe = RFC5987_UNRESERVED` (RFC 5987 `attr-char`), UTF-8, no `+`
    /// substitution.
    pub const RFC5987: PercentCodec = PercentCodec {
        safe: RFC5987_UNRESERVED,
        charset: Charset::Utf8,
        blank_as_plus: false,
    };

    #[must_use]
    pub fn with_safe(safe: CharClass) -> Self {
        Self {
            safe,
            charset: Charset::Utf8,
            blank_as_plus: false,
        }
    }

    #[must_use]
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    #[must_use]
    pub fn with_blank_as_plus(mut self, blank_as_plus: bool) -> Self {
        self.blank_as_plus = blank_as_plus;
        self
    }

    /// Percent-encodes `input`, appending to `out`. A byte outside `safe`
    /// becomes `%XY` with uppercase hex digits, unless it is an ASCII space
    /// and `blank_as_plus` is set, in which case it becomes `+`.
    pub fn encode_into(&self, out: &mut String, input: &str) {
        let mut bytes = Vec::with_capacity(input.len());
        self.charset.encode(input, &mut bytes);
        for b in bytes {
            if self.safe.contains(b) {
                out.push(b as char);
            } else if self.blank_as_plus && b == b' ' {
                out.push('+');
            } else {
                out.push('%');
                out.push(HEX_DIGITS[(b >> 4) as usize] as char);
                out.push(HEX_DIGITS[(b & 0xf) as usize] as char);
            }
        }
    }

    #[must_use]
    pub fn encode(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.encode_into(&mut out, input);
        out
    }

    /// Decodes `input`, with `plus_as_blank` controlling whether a literal
    /// `+` becomes a space.
    ///
    /// A malformed `%xy` escape (missing or non-hex digits) is never an
    /// error: the `%` and whatever follows it pass through literally.
    #[must_use]
    pub fn decode(&self, input: &str, plus_as_blank: bool) -> String {
        self.charset.decode(&decode_bytes(input, plus_as_blank))
    }
}

fn decode_bytes(input: &str, plus_as_blank: bool) -> Vec<u8> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '%' && i + 2 < chars.len() {
            match (hex_value(chars[i + 1]), hex_value(chars[i + 2])) {
                (Some(hi), Some(lo)) => {
                    out.push((hi << 4) | lo);
                    i += 2;
                }
                _ => out.push(b'%'),
            }
        } else if c == '+' && plus_as_blank {
            out.push(b' ');
        } else {
            let mut buf = [0u8; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
        i += 1;
    }
    out
}
