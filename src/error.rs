use std::fmt::{Display, Formatter};

/// Why a string failed to parse as a URI reference.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum UriSyntaxError {
    /// The input does not start with a syntactically valid `scheme ":"`.
    MissingScheme,
    /// The scheme token contains a byte outside `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    InvalidScheme,
    /// An `http`/`https` URI was parsed with no host. A malformed authority
    /// (unterminated `[...]`, non-numeric port) is not a variant of its own:
    /// it is swallowed into an unset `host` rather than rejected, per the
    /// authority-parser's documented forgiving behavior.
    EmptyHost,
}
impl UriSyntaxError {
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            UriSyntaxError::MissingScheme => "UriSyntaxError::MissingScheme",
            UriSyntaxError::InvalidScheme => "UriSyntaxError::InvalidScheme",
            UriSyntaxError::EmptyHost => "UriSyntaxError::EmptyHost",
        }
    }
}
impl Display for UriSyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
impl std::error::Error for UriSyntaxError {}

/// Why `UriBuilder::build`/`build_string` refused to produce a URI.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum BuildError {
    /// An `http`/`https` scheme was combined with a blank host.
    AuthorityWithoutHost,
}
impl BuildError {
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            BuildError::AuthorityWithoutHost => "BuildError::AuthorityWithoutHost",
        }
    }
}
impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
impl std::error::Error for BuildError {}
