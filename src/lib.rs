//! uriref
//! ======
//! [![crates.io version](https://img.shields.io/crates/v/uriref.svg)](https://crates.io/crates/uriref)
//! [![license: MIT OR Apache-2.0](https://raw.githubusercontent.com/mleonhard/servlin/main/license-apache-2.0.svg)](http://www.apache.org/licenses/LICENSE-2.0)
//! [![unsafe forbidden](https://raw.githubusercontent.com/mleonhard/servlin/main/unsafe-forbidden-success.svg)](https://github.com/rust-secure-code/safety-dance/)
//!
//! A URI construction, decomposition, and percent-encoding engine
//! conforming to RFC 3986, with RFC 5987 support for attribute-value
//! encoding.
//!
//! # Features
//! - `forbid(unsafe_code)`
//! - Byte-accurate percent-encoding: uppercase hex, optional `+`/space
//!   substitution, forgiving decode of malformed `%xy` escapes
//! - A mutable [`UriBuilder`] that holds both raw and decoded forms of every
//!   component, so unmodified input round-trips byte-exact while still
//!   allowing structured edits
//! - Dot-segment normalization per RFC 3986 section 5.2.4
//! - No network I/O, no async runtime: parsing and serialization only
//!
//! # Example
//! ```rust
//! use uriref::{EncodingPolicy, UriBuilder};
//!
//! let uri = UriBuilder::new()
//!     .set_scheme("https")
//!     .set_host("example.com")
//!     .set_path_segments(&["path", "to", "thing"])
//!     .add_parameter("q", Some("hello world".to_string()))
//!     .set_encoding_policy(EncodingPolicy::Strict)
//!     .build()
//!     .unwrap();
//! assert_eq!(uri.to_string(), "https://example.com/path/to/thing?q=hello%20world");
//! ```
#![forbid(unsafe_code)]

mod authority;
mod builder;
mod char_class;
mod charset;
mod codec;
mod error;
mod normalize;
mod path;
mod query;
mod tokenizer;
mod uri;

pub use crate::builder::{EncodingPolicy, HttpHost, UriBuilder};
pub use crate::char_class::{
    CharClass, FRAGMENT, GEN_DELIMS, PATH_SEGMENT, PCHAR, QUERY, REG_NAME, RESERVED,
    RFC5987_UNRESERVED, SUB_DELIMS, UNRESERVED, URIC, USERINFO,
};
pub use crate::charset::Charset;
pub use crate::codec::PercentCodec;
pub use crate::error::{BuildError, UriSyntaxError};
pub use crate::query::NameValuePair;
pub use crate::uri::Uri;
