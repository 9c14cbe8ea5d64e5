//! The mutable URI component state machine.
use crate::authority::{format_authority, parse_authority};
use crate::char_class::{FRAGMENT, PATH_SEGMENT, QUERY, REG_NAME, UNRESERVED, URIC, USERINFO};
use crate::charset::Charset;
use crate::codec::PercentCodec;
use crate::error::{BuildError, UriSyntaxError};
use crate::normalize::remove_dot_segments;
use crate::path::{format_path, parse_path};
use crate::query::{format_query, parse_query, NameValuePair};
use crate::uri::Uri;
use safe_regex::{regex, Matcher0};

/// Which safe-character set each component uses, selected by
/// [`EncodingPolicy`]. STRICT is deliberately the stingier of the two: it is
/// this crate's default despite a conflicting claim once seen in upstream
/// documentation, because it is the behavior observed in practice.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EncodingPolicy {
    #[default]
    Strict,
    Rfc3986,
}

/// A `(scheme, userInfo, host, port)` tuple: a named endpoint's
/// authority, independent of any one URI it might appear in.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HttpHost {
    pub scheme: Option<String>,
    pub user_info: Option<String>,
    pub host: String,
    pub port: Option<u16>,
}

fn is_valid_scheme(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    let matcher: Matcher0<_> = regex!(br"[A-Za-z][-+.A-Za-z0-9]*");
    matcher.is_match(s.as_bytes())
}

/// The raw, still-percent-encoded pieces a URI string splits into before any
/// per-component decoding happens.
struct RawUriParts<'a> {
    scheme: &'a str,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

fn split_uri_string(s: &str) -> Result<RawUriParts<'_>, UriSyntaxError> {
    let colon = s.find(':').ok_or(UriSyntaxError::MissingScheme)?;
    let scheme = &s[..colon];
    if !is_valid_scheme(scheme) {
        return Err(UriSyntaxError::InvalidScheme);
    }
    let mut rest = &s[colon + 1..];

    let fragment = if let Some(idx) = rest.find('#') {
        let fragment = &rest[idx + 1..];
        rest = &rest[..idx];
        Some(fragment)
    } else {
        None
    };
    let query = if let Some(idx) = rest.find('?') {
        let query = &rest[idx + 1..];
        rest = &rest[..idx];
        Some(query)
    } else {
        None
    };

    let (authority, path) = if let Some(after_slashes) = rest.strip_prefix("//") {
        let end = after_slashes
            .find('/')
            .unwrap_or(after_slashes.len());
        (Some(&after_slashes[..end]), &after_slashes[end..])
    } else {
        (None, rest)
    };

    Ok(RawUriParts {
        scheme,
        authority,
        path,
        query,
        fragment,
    })
}

/// A mutable aggregate of URI components, holding both raw-encoded and
/// decoded representations so unmodified input can round-trip byte-exact
/// while still supporting structured edits.
///
/// Mutators consume and return `self`, in the style of this crate's sibling
/// builder types, so calls chain: `UriBuilder::new().set_scheme("https")...`.
#[derive(Clone, Debug, Default)]
pub struct UriBuilder {
    scheme: Option<String>,
    encoded_scheme_specific_part: Option<String>,
    encoded_authority: Option<String>,
    user_info: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    path_segments: Option<Vec<String>>,
    encoded_path: Option<String>,
    path_rootless: bool,
    query_params: Option<Vec<NameValuePair>>,
    query: Option<String>,
    encoded_query: Option<String>,
    fragment: Option<String>,
    encoded_fragment: Option<String>,
    charset: Charset,
    encoding_policy: EncodingPolicy,
    plus_as_blank: bool,
}

fn normalize_blank(s: impl Into<String>) -> Option<String> {
    let s = s.into();
    if s.trim().is_empty() { None } else { Some(s) }
}

impl UriBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `s` as an absolute URI (`scheme ":" hier-part [ "?" query ] [ "#" fragment ]`),
    /// populating both the raw and decoded representation of every
    /// component it finds, as described by spec.md's "from a URI string"
    /// construction path.
    ///
    /// # Errors
    /// Returns [`UriSyntaxError`] when `s` has no syntactically valid
    /// leading `scheme ":"`.
    pub fn parse(s: &str) -> Result<Self, UriSyntaxError> {
        let parts = split_uri_string(s)?;
        let codec = PercentCodec::RFC3986;
        let mut builder = Self {
            scheme: Some(parts.scheme.to_ascii_lowercase()),
            encoded_query: parts.query.map(str::to_string),
            encoded_fragment: parts.fragment.map(str::to_string),
            ..Self::default()
        };
        if let Some(authority) = parts.authority {
            builder.encoded_authority = Some(authority.to_string());
            if let Some(parsed) = parse_authority(authority, &codec) {
                builder.user_info = parsed.user_info;
                builder.host = Some(parsed.host);
                builder.port = parsed.port;
            }
        }
        if !parts.path.is_empty() || parts.authority.is_some() {
            builder.encoded_path = Some(parts.path.to_string());
            builder.path_rootless = parts.authority.is_none() && !parts.path.starts_with('/');
            builder.path_segments = Some(parse_path(parts.path, &codec));
        }
        if let Some(query) = parts.query {
            builder.query_params = Some(parse_query(query, &codec, builder.plus_as_blank));
        }
        if let Some(fragment) = parts.fragment {
            builder.fragment = Some(codec.decode(fragment, false));
        }
        Ok(builder)
    }

    // --- mutators -------------------------------------------------------

    #[must_use]
    pub fn set_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = normalize_blank(scheme);
        self.encoded_scheme_specific_part = None;
        self
    }

    #[must_use]
    pub fn set_user_info(mut self, user_info: impl Into<String>) -> Self {
        self.user_info = normalize_blank(user_info);
        self.encoded_authority = None;
        self.encoded_scheme_specific_part = None;
        self
    }

    #[must_use]
    pub fn set_host(mut self, host: impl Into<String>) -> Self {
        self.host = normalize_blank(host);
        self.encoded_authority = None;
        self.encoded_scheme_specific_part = None;
        self
    }

    #[must_use]
    pub fn set_port(mut self, port: Option<u16>) -> Self {
        self.port = port;
        self.encoded_authority = None;
        self.encoded_scheme_specific_part = None;
        self
    }

    #[must_use]
    pub fn set_authority(mut self, authority: impl Into<String>) -> Self {
        let authority = authority.into();
        let codec = PercentCodec::RFC3986;
        if let Some(parsed) = parse_authority(&authority, &codec) {
            self.user_info = parsed.user_info;
            self.host = Some(parsed.host);
            self.port = parsed.port;
        } else {
            self.host = None;
        }
        self.encoded_authority = Some(authority);
        self.encoded_scheme_specific_part = None;
        self
    }

    #[must_use]
    pub fn set_http_host(mut self, http_host: HttpHost) -> Self {
        if let Some(scheme) = http_host.scheme {
            self = self.set_scheme(scheme);
        }
        if let Some(user_info) = http_host.user_info {
            self = self.set_user_info(user_info);
        }
        self.host = normalize_blank(http_host.host);
        self.port = http_host.port;
        self.encoded_authority = None;
        self.encoded_scheme_specific_part = None;
        self
    }

    /// Re-splits `path` into segments, as if it had just been parsed out of
    /// a URI string.
    #[must_use]
    pub fn set_path(mut self, path: impl AsRef<str>) -> Self {
        let path = path.as_ref();
        let codec = self.path_codec();
        self.path_segments = Some(parse_path(path, &codec));
        self.path_rootless = self.host.is_none() && !path.starts_with('/');
        self.encoded_path = None;
        self.encoded_scheme_specific_part = None;
        self
    }

    #[must_use]
    pub fn set_path_segments(self, segments: &[impl AsRef<str>]) -> Self {
        self.set_path_segments_rootless(segments, false)
    }

    #[must_use]
    pub fn set_path_segments_rootless(
        mut self,
        segments: &[impl AsRef<str>],
        rootless: bool,
    ) -> Self {
        self.path_segments = Some(segments.iter().map(|s| s.as_ref().to_string()).collect());
        self.path_rootless = rootless;
        self.encoded_path = None;
        self.encoded_scheme_specific_part = None;
        self
    }

    #[must_use]
    pub fn append_path_segments(mut self, segments: &[impl AsRef<str>]) -> Self {
        let existing = self.path_segments.get_or_insert_with(Vec::new);
        existing.extend(segments.iter().map(|s| s.as_ref().to_string()));
        self.encoded_path = None;
        self.encoded_scheme_specific_part = None;
        self
    }

    #[must_use]
    pub fn append_path(self, path: impl AsRef<str>) -> Self {
        let codec = self.path_codec();
        let extra = parse_path(path.as_ref(), &codec);
        self.append_path_segments(&extra)
    }

    #[must_use]
    pub fn set_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = normalize_blank(fragment);
        self.encoded_fragment = None;
        self
    }

    #[must_use]
    pub fn set_custom_query(mut self, query: impl Into<String>) -> Self {
        self.query = normalize_blank(query);
        self.query_params = None;
        self.encoded_query = None;
        self
    }

    #[must_use]
    pub fn set_parameter(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        let name = name.into();
        let params = self.query_params.get_or_insert_with(Vec::new);
        params.retain(|p| p.name != name);
        params.push(NameValuePair::new(name, value));
        self.query = None;
        self.encoded_query = None;
        self
    }

    #[must_use]
    pub fn add_parameter(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.query_params
            .get_or_insert_with(Vec::new)
            .push(NameValuePair::new(name, value));
        self.query = None;
        self.encoded_query = None;
        self
    }

    #[must_use]
    pub fn add_parameters(mut self, params: impl IntoIterator<Item = NameValuePair>) -> Self {
        self.query_params.get_or_insert_with(Vec::new).extend(params);
        self.query = None;
        self.encoded_query = None;
        self
    }

    /// Removes every parameter named `name`.
    ///
    /// # Panics
    /// Panics if `name` is empty: an unnamed parameter can never exist, so
    /// calling this with one is a programmer error, not a legitimate no-op.
    #[must_use]
    pub fn remove_parameter(mut self, name: &str) -> Self {
        assert!(!name.is_empty(), "remove_parameter called with empty name");
        if let Some(params) = &mut self.query_params {
            params.retain(|p| p.name != name);
        }
        self.encoded_query = None;
        self
    }

    #[must_use]
    pub fn clear_parameters(mut self) -> Self {
        self.query_params = None;
        self.encoded_query = None;
        self
    }

    #[must_use]
    pub fn remove_query(mut self) -> Self {
        self.query = None;
        self.query_params = None;
        self.encoded_query = None;
        self
    }

    /// Sets the raw, still-percent-encoded query string directly, bypassing
    /// `queryParams`/custom-query parsing. Exists for callers that already
    /// have an encoded query string on hand (e.g. reconstructing a
    /// [`Uri`] piecemeal) and matches the cache `set_plus_as_blank`
    /// re-parses when flipped afterward.
    #[must_use]
    pub fn set_encoded_query(mut self, encoded_query: impl Into<String>) -> Self {
        self.encoded_query = normalize_blank(encoded_query);
        self.query_params = None;
        self.query = None;
        self
    }

    #[must_use]
    pub fn set_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Flips the decode-side `+`-to-space policy. If an `encodedQuery` is
    /// currently cached, it is re-parsed into `queryParams` under the new
    /// policy; already-structured `queryParams` are left untouched.
    #[must_use]
    pub fn set_plus_as_blank(mut self, plus_as_blank: bool) -> Self {
        self.plus_as_blank = plus_as_blank;
        if let Some(encoded_query) = self.encoded_query.clone() {
            let codec = self.query_codec_for_params();
            self.query_params = Some(parse_query(&encoded_query, &codec, plus_as_blank));
            self.encoded_query = None;
        }
        self
    }

    #[must_use]
    pub fn set_encoding_policy(mut self, policy: EncodingPolicy) -> Self {
        self.encoding_policy = policy;
        self
    }

    #[must_use]
    pub fn set_scheme_specific_part(mut self, part: impl Into<String>) -> Self {
        self.encoded_scheme_specific_part = normalize_blank(part);
        self
    }

    // --- safe-set selection ----------------------------------------------

    fn user_info_codec(&self) -> PercentCodec {
        let safe = match self.encoding_policy {
            EncodingPolicy::Strict => UNRESERVED,
            EncodingPolicy::Rfc3986 => USERINFO,
        };
        PercentCodec::with_safe(safe).with_charset(self.charset)
    }

    fn host_codec(&self) -> PercentCodec {
        let safe = match self.encoding_policy {
            EncodingPolicy::Strict => UNRESERVED,
            EncodingPolicy::Rfc3986 => REG_NAME,
        };
        PercentCodec::with_safe(safe).with_charset(self.charset)
    }

    fn path_codec(&self) -> PercentCodec {
        let safe = match self.encoding_policy {
            EncodingPolicy::Strict => UNRESERVED,
            EncodingPolicy::Rfc3986 => PATH_SEGMENT,
        };
        PercentCodec::with_safe(safe).with_charset(self.charset)
    }

    fn query_codec_for_params(&self) -> PercentCodec {
        let safe = match self.encoding_policy {
            EncodingPolicy::Strict => UNRESERVED,
            EncodingPolicy::Rfc3986 => QUERY,
        };
        PercentCodec::with_safe(safe).with_charset(self.charset)
    }

    fn query_codec_for_custom(&self) -> PercentCodec {
        let safe = match self.encoding_policy {
            EncodingPolicy::Strict => URIC,
            EncodingPolicy::Rfc3986 => QUERY,
        };
        PercentCodec::with_safe(safe).with_charset(self.charset)
    }

    fn fragment_codec(&self) -> PercentCodec {
        let safe = match self.encoding_policy {
            EncodingPolicy::Strict => URIC,
            EncodingPolicy::Rfc3986 => FRAGMENT,
        };
        PercentCodec::with_safe(safe).with_charset(self.charset)
    }

    // --- accessors --------------------------------------------------------

    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    #[must_use]
    pub fn user_info(&self) -> Option<&str> {
        self.user_info.as_deref()
    }

    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    #[must_use]
    pub fn path_segments(&self) -> Option<&[String]> {
        self.path_segments.as_deref()
    }

    #[must_use]
    pub fn is_path_rootless(&self) -> bool {
        self.path_rootless
    }

    /// Reconstructs `/seg1/seg2` from `pathSegments`; `None` if no path
    /// exists at all (the URI is opaque).
    #[must_use]
    pub fn path(&self) -> Option<String> {
        let segments = self.path_segments.as_ref()?;
        let mut out = String::new();
        if !self.path_rootless {
            out.push('/');
        }
        out.push_str(&segments.join("/"));
        Some(out)
    }

    #[must_use]
    pub fn query_params(&self) -> &[NameValuePair] {
        self.query_params.as_deref().unwrap_or(&[])
    }

    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Encodes `user_info`, splitting once on the first `:` into a
    /// user/password pair and encoding each half separately so the
    /// separator itself is never escaped.
    fn encode_user_info(&self, user_info: &str) -> String {
        let codec = self.user_info_codec();
        match user_info.split_once(':') {
            Some((user, password)) => {
                let mut out = codec.encode(user);
                out.push(':');
                out.push_str(&codec.encode(password));
                out
            }
            None => codec.encode(user_info),
        }
    }

    /// Synthesises an authority string from `userInfo`, `host`, `port`.
    /// An IPv6 host is bracketed literally, never percent-encoded; any
    /// other host is encoded with the selected reg-name safe set.
    #[must_use]
    pub fn authority(&self) -> Option<String> {
        let host = self.host.as_deref()?;
        let rendered_host = if host.parse::<std::net::Ipv6Addr>().is_ok() {
            format!("[{host}]")
        } else {
            self.host_codec().encode(host)
        };
        let encoded_user_info = self.user_info.as_deref().map(|u| self.encode_user_info(u));
        let mut out = String::new();
        format_authority(&mut out, encoded_user_info.as_deref(), &rendered_host, self.port);
        Some(out)
    }

    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.path_segments.is_none() && self.encoded_path.is_none()
    }

    // --- serialization ------------------------------------------------

    /// Walks components in canonical order, choosing raw or re-encoded form
    /// per component, exactly as spec.md's `buildString` algorithm
    /// specifies.
    #[must_use]
    pub fn build_string(&self) -> String {
        let mut out = String::new();
        if let Some(scheme) = &self.scheme {
            out.push_str(scheme);
            out.push(':');
        }
        if let Some(ssp) = &self.encoded_scheme_specific_part {
            out.push_str(ssp);
            self.append_query_and_fragment(&mut out);
            return out;
        }

        let authority_present = self.append_authority(&mut out);
        self.append_path(&mut out, authority_present);
        self.append_query_and_fragment(&mut out);
        out
    }

    fn append_authority(&self, out: &mut String) -> bool {
        if let Some(encoded_authority) = &self.encoded_authority {
            out.push_str("//");
            out.push_str(encoded_authority);
            true
        } else if let Some(authority) = self.authority() {
            out.push_str("//");
            out.push_str(&authority);
            true
        } else {
            false
        }
    }

    fn append_path(&self, out: &mut String, authority_present: bool) {
        if let Some(encoded_path) = &self.encoded_path {
            if authority_present && !encoded_path.is_empty() && !encoded_path.starts_with('/') {
                out.push('/');
            }
            out.push_str(encoded_path);
        } else if let Some(segments) = &self.path_segments {
            let rootless = self.path_rootless && !authority_present;
            if !rootless {
                out.push('/');
            }
            format_path(out, segments, &self.path_codec());
        }
    }

    fn append_query_and_fragment(&self, out: &mut String) {
        if let Some(encoded_query) = &self.encoded_query {
            out.push('?');
            out.push_str(encoded_query);
        } else if let Some(params) = &self.query_params {
            if !params.is_empty() {
                out.push('?');
                format_query(out, params, &self.query_codec_for_params());
            }
        } else if let Some(query) = &self.query {
            out.push('?');
            self.query_codec_for_custom().encode_into(out, query);
        }
        if let Some(encoded_fragment) = &self.encoded_fragment {
            out.push('#');
            out.push_str(encoded_fragment);
        } else if let Some(fragment) = &self.fragment {
            out.push('#');
            self.fragment_codec().encode_into(out, fragment);
        }
    }

    /// Consumes the builder, producing an immutable [`Uri`].
    ///
    /// # Errors
    /// Returns [`BuildError::AuthorityWithoutHost`] for `http`/`https`
    /// schemes combined with a blank host.
    pub fn build(self) -> Result<Uri, BuildError> {
        let is_http_family = matches!(self.scheme.as_deref(), Some("http" | "https"));
        if is_http_family && self.host.as_deref().unwrap_or("").is_empty() {
            return Err(BuildError::AuthorityWithoutHost);
        }
        Ok(Uri::from_builder(self))
    }

    /// Lowercases `scheme`/`host`, clears every raw cache to force
    /// re-encoding, and removes `.`/`..` path segments per RFC 3986
    /// section 5.2.4. Leaves a rootless path untouched.
    #[must_use]
    pub fn optimize(mut self) -> Self {
        self.scheme = self.scheme.map(|s| s.to_ascii_lowercase());
        if self.path_segments.is_some() && self.path_rootless {
            return self;
        }
        self.encoded_authority = None;
        self.encoded_path = None;
        self.encoded_query = None;
        self.encoded_fragment = None;
        self.encoded_scheme_specific_part = None;
        self.host = self.host.map(|h| h.to_ascii_lowercase());
        if let Some(segments) = &self.path_segments {
            self.path_segments = Some(remove_dot_segments(segments));
        }
        self
    }
}

impl std::fmt::Display for UriBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.build_string())
    }
}
