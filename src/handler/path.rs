//! URL path inspection module
//!
//! Normalization is used purely as a traversal detector: a request whose
//! path changes under normalization contained `.`/`..` segments or doubled
//! separators and is rejected before any filesystem access.

/// Normalize a POSIX-style path: drop `.` segments and redundant
/// separators, resolve `..` against preceding segments. `..` above the
/// root of an absolute path is discarded; a trailing separator is kept.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = path.starts_with('/');
    let trailing = path.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(&last) if last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let mut normalized = segments.join("/");
    if absolute {
        normalized.insert(0, '/');
    } else if normalized.is_empty() {
        return ".".to_string();
    }
    if trailing && !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// Whether the path is already in normalized form
pub fn is_normalized(path: &str) -> bool {
    normalize(path) == path
}

/// Final path segment, with directory components and trailing
/// separators removed
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_resolves_dot_segments() {
        assert_eq!(normalize("/../etc/passwd"), "/etc/passwd");
        assert_eq!(normalize("/a/../b"), "/b");
        assert_eq!(normalize("/a/./b"), "/a/b");
        assert_eq!(normalize("//x"), "/x");
        assert_eq!(normalize("/a//b/"), "/a/b/");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), ".");
    }

    #[test]
    fn test_normalize_relative_paths() {
        assert_eq!(normalize("a/../../b"), "../b");
        assert_eq!(normalize("./a"), "a");
        assert_eq!(normalize("a/.."), ".");
    }

    #[test]
    fn test_is_normalized() {
        assert!(is_normalized("/report.zip"));
        assert!(is_normalized("/sub/dir/file.zip"));
        assert!(is_normalized("/"));
        assert!(!is_normalized("/../etc/passwd"));
        assert!(!is_normalized("/a/../b"));
        assert!(!is_normalized("//x"));
        assert!(!is_normalized("/a/./b"));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/report.zip"), "report.zip");
        assert_eq!(base_name("/sub/dir/file.zip"), "file.zip");
        assert_eq!(base_name("/dir/"), "dir");
        assert_eq!(base_name("/"), "");
        assert_eq!(base_name("plain"), "plain");
    }
}
