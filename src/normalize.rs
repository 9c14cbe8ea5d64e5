//! RFC 3986 section 5.2.4 dot-segment removal.

/// Removes empty, `.`, and `..` segments from `segments` the way a
/// path-merge algorithm would, except it operates directly on the
/// already-split segment list rather than reassembling and rescanning a
/// string. An interior empty segment (from a `//` in the source path) is
/// dropped just like `.`; the trailing-empty check below exists to restore
/// the one case, a genuine trailing slash, that this skip would otherwise
/// eat.
///
/// An empty input is special-cased to `[""]`: `UriBuilder::set_path_segments`
/// can be called with an empty slice to represent "no path", and an empty
/// `Vec` fed through the main loop below would otherwise silently vanish
/// instead of preserving that as a single empty segment.
#[must_use]
pub fn remove_dot_segments(segments: &[String]) -> Vec<String> {
    if segments.is_empty() {
        return vec![String::new()];
    }
    let trailing_empty = segments.last().is_some_and(String::is_empty);
    let mut out: Vec<String> = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment.as_str() {
            "" | "." => {}
            ".." => {
                out.pop();
            }
            _ => out.push(segment.clone()),
        }
    }
    if trailing_empty && out.last().is_some_and(|s| !s.is_empty()) {
        out.push(String::new());
    }
    out
}
