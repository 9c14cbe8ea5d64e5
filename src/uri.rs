//! The immutable value a [`UriBuilder`] produces.
use crate::builder::UriBuilder;
use crate::error::UriSyntaxError;
use crate::query::NameValuePair;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A parsed, immutable URI, built either by [`UriBuilder::build`] or by
/// parsing a string directly with [`Uri::parse`].
///
/// Exposes the same raw-vs-decoded accessors the builder does: used at both
/// ends of the builder (constructing one from an existing `Uri`, and
/// producing one from a finished `UriBuilder`).
#[derive(Clone, Debug, Default)]
pub struct Uri {
    builder: UriBuilder,
}

impl Uri {
    pub(crate) fn from_builder(builder: UriBuilder) -> Self {
        Self { builder }
    }

    /// Parses `s` as an absolute URI and builds it in one step.
    ///
    /// # Errors
    /// Returns [`UriSyntaxError`] on malformed input; see
    /// [`UriBuilder::parse`].
    pub fn parse(s: &str) -> Result<Self, UriSyntaxError> {
        let builder = UriBuilder::parse(s)?;
        builder.build().map_err(|_| UriSyntaxError::EmptyHost)
    }

    /// Returns a [`UriBuilder`] pre-populated from this value, for making
    /// edits and reserializing.
    #[must_use]
    pub fn to_builder(&self) -> UriBuilder {
        self.builder.clone()
    }

    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.builder.scheme()
    }

    #[must_use]
    pub fn user_info(&self) -> Option<&str> {
        self.builder.user_info()
    }

    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.builder.host()
    }

    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.builder.port()
    }

    #[must_use]
    pub fn path(&self) -> Option<String> {
        self.builder.path()
    }

    #[must_use]
    pub fn path_segments(&self) -> Option<&[String]> {
        self.builder.path_segments()
    }

    #[must_use]
    pub fn query_params(&self) -> &[NameValuePair] {
        self.builder.query_params()
    }

    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.builder.query()
    }

    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.builder.fragment()
    }

    #[must_use]
    pub fn authority(&self) -> Option<String> {
        self.builder.authority()
    }

    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.builder.is_absolute()
    }

    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.builder.is_opaque()
    }
}

impl Display for Uri {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.builder.build_string())
    }
}

impl FromStr for Uri {
    type Err = UriSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s)
    }
}

impl PartialEq for Uri {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
impl Eq for Uri {}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Uri::parse(&s).map_err(serde::de::Error::custom)
    }
}
