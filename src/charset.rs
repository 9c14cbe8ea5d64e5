//! The byte-level transcoder the percent-codec encodes/decodes through.
//!
//! Real RFC 3986 processing only ever needs UTF-8: non-ASCII payload bytes
//! are transcoded to UTF-8 before percent-encoding, never to some other
//! 8-bit charset. `Charset` exists as a small, closed enum rather than a
//! trait object so `UriBuilder` stays `Clone`/`Debug`/`Eq` without boxing.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Charset {
    #[default]
    Utf8,
}

impl Charset {
    /// Appends the UTF-8 bytes of `input` to `out`.
    pub fn encode(self, input: &str, out: &mut Vec<u8>) {
        match self {
            Charset::Utf8 => out.extend_from_slice(input.as_bytes()),
        }
    }

    /// Decodes `bytes` as text, replacing ill-formed sequences with
    /// `U+FFFD` rather than failing.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Charset::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}
