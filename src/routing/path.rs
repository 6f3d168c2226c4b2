//! Request path normalization.
//!
//! # Rules
//! - Query string (`?...`) dropped
//! - Configured base path removed when it prefixes the path
//! - Always begins with `/`
//! - Trailing `/` stripped unless the path is exactly `/`
//!
//! Normalization is idempotent.

/// Normalize a raw request target against `base_path`.
///
/// An empty `base_path` disables prefix removal. A path that does not start
/// with the base path is kept whole.
pub fn normalize(raw: &str, base_path: &str) -> String {
    let raw = raw.split_once('?').map_or(raw, |(path, _)| path);
    let rest = if base_path.is_empty() {
        raw
    } else {
        raw.strip_prefix(base_path).unwrap_or(raw)
    };

    let mut path = String::with_capacity(rest.len() + 1);
    if !rest.starts_with('/') {
        path.push('/');
    }
    path.push_str(rest);

    let kept = path.trim_end_matches('/').len().max(1);
    path.truncate(kept);
    path
}

/// Split a path into segments after dropping one leading `/`.
///
/// `/` yields a single empty segment, the same as an empty template.
pub fn segments(path: &str) -> std::str::Split<'_, char> {
    path.strip_prefix('/').unwrap_or(path).split('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        assert_eq!(normalize("/artefact/123/", ""), "/artefact/123");
        assert_eq!(normalize("/artefact/123", ""), "/artefact/123");
    }

    #[test]
    fn test_repeated_trailing_slashes_stripped() {
        assert_eq!(normalize("/a//", ""), "/a");
        assert_eq!(normalize("//", ""), "/");
    }

    #[test]
    fn test_root_is_kept() {
        assert_eq!(normalize("/", ""), "/");
        assert_eq!(normalize("", ""), "/");
    }

    #[test]
    fn test_leading_slash_forced() {
        assert_eq!(normalize("status", ""), "/status");
    }

    #[test]
    fn test_base_path_removed() {
        assert_eq!(normalize("/example/status", "/example"), "/status");
        assert_eq!(normalize("/example", "/example"), "/");
        assert_eq!(normalize("/example/", "/example"), "/");
        assert_eq!(normalize("/other/status", "/example"), "/other/status");
    }

    #[test]
    fn test_query_dropped() {
        assert_eq!(normalize("/example/artefact/1?x=2", "/example"), "/artefact/1");
        assert_eq!(normalize("/status/?verbose", ""), "/status");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["/", "/a", "/a/b/", "a/b", "/a//", "/x/{y}/"] {
            let once = normalize(raw, "");
            assert_eq!(normalize(&once, ""), once, "raw = {raw}");
        }
    }

    #[test]
    fn test_segments() {
        assert_eq!(segments("/").collect::<Vec<_>>(), vec![""]);
        assert_eq!(segments("/a/b").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(segments("a/b").collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
