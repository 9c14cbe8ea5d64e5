//! Splits `user:info@host:port` authority strings.
use crate::codec::PercentCodec;

/// Notes a swallowed authority-parse failure. A no-op unless the `log`
/// cargo feature is enabled; this crate never writes to stderr on its own.
macro_rules! log_swallowed {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        log::debug!($($tt)*);
    };
}

/// The pieces recovered from a `userinfo@host:port` authority string, still
/// percent-decoded. A missing `userinfo` or `port` is `None`; `host` is
/// always present when this type is produced (a host-less authority is
/// represented at the `UriBuilder` level by leaving `encoded_authority` set
/// and `host` unset, not by this type — see the authority-swallow note on
/// `parse_authority`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedAuthority {
    pub user_info: Option<String>,
    pub host: String,
    pub port: Option<u16>,
}

/// Splits an authority string into userinfo/host/port.
///
/// Returns `None` rather than an error on malformed input (an unterminated
/// `[`, or a port that isn't all digits): the caller treats this as a
/// "swallowed" parse failure, caching the raw authority string but leaving
/// `host` unset, rather than rejecting the whole URI over what's far more
/// often a typo than a protocol violation.
#[must_use]
pub fn parse_authority(s: &str, codec: &PercentCodec) -> Option<ParsedAuthority> {
    let (user_info_raw, rest) = match s.rfind('@') {
        Some(idx) => (Some(&s[..idx]), &s[idx + 1..]),
        None => (None, s),
    };
    let (host_raw, port_raw) = if let Some(bracket_end) = rest.find(']') {
        if !rest.starts_with('[') {
            log_swallowed!("uriref: authority {s:?} has unmatched ']'");
            return None;
        }
        let host_raw = &rest[..=bracket_end];
        let after = &rest[bracket_end + 1..];
        match after.strip_prefix(':') {
            Some(port) => (host_raw, Some(port)),
            None if after.is_empty() => (host_raw, None),
            None => {
                log_swallowed!("uriref: authority {s:?} has trailing garbage after ']'");
                return None;
            }
        }
    } else {
        match rest.rfind(':') {
            Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
            None => (rest, None),
        }
    };
    let port = match port_raw {
        Some(p) if p.is_empty() => None,
        Some(p) => Some(p.parse::<u16>().ok().or_else(|| {
            log_swallowed!("uriref: authority {s:?} has a non-numeric or out-of-range port");
            None
        })?),
        None => None,
    };
    let host_unbracketed = host_raw
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host_raw);
    Some(ParsedAuthority {
        user_info: user_info_raw.map(|u| codec.decode(u, false)),
        host: codec.decode(host_unbracketed, false),
        port,
    })
}

/// Joins already-encoded `user_info`/`host`/`port` pieces into a single
/// authority string. Neither `user_info` nor `host` is percent-encoded
/// here: the caller is expected to have already encoded them with whatever
/// safe set applies (see `UriBuilder::authority`).
pub fn format_authority(out: &mut String, user_info: Option<&str>, host: &str, port: Option<u16>) {
    if let Some(user_info) = user_info {
        out.push_str(user_info);
        out.push('@');
    }
    out.push_str(host);
    if let Some(port) = port {
        out.push(':');
        out.push_str(&port.to_string());
    }
}
