//! Lexical path normalization.
//!
//! Toolchain values are compared and emitted as strings, so normalization is
//! done purely on the text: `/` is the only separator, `.` segments and
//! duplicate separators are dropped, and `..` removes the preceding segment.
//! The filesystem is never consulted, so symlinks are not followed and paths
//! that do not exist normalize the same way as ones that do.

/// Normalize a `/`-separated path.
///
/// - `..` above the root of an absolute path stays at the root
/// - `..` at the start of a relative path is kept
/// - A relative path that collapses to nothing becomes `.`
/// - The empty string stays empty
///
/// # Examples
///
/// ```
/// use toolchain_flags::path::normalize_path;
///
/// assert_eq!(normalize_path("/opt//gcc-8.0/./bin/../"), "/opt/gcc-8.0");
/// assert_eq!(normalize_path("a/.."), ".");
/// assert_eq!(normalize_path(""), "");
/// ```
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                // Can't climb above the root
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Resolve `path` against `base` and normalize the result.
///
/// Absolute paths ignore `base`. With an empty `base` a relative path is only
/// normalized, since there is no working directory to anchor it to.
pub fn resolve_path(base: &str, path: &str) -> String {
    if path.starts_with('/') || base.is_empty() {
        normalize_path(path)
    } else {
        normalize_path(&format!("{}/{}", base, path))
    }
}

/// Resolve `path` against `base` and anchor the result at `/`.
///
/// A result that is still relative (no `base`, or a relative `base`) is taken
/// as relative to the root, so the outcome is always absolute and never
/// depends on the process' working directory.
///
/// ```
/// use toolchain_flags::path::absolute_path;
///
/// assert_eq!(absolute_path("/opt/clang/bin", "../../gcc-7"), "/opt/gcc-7");
/// assert_eq!(absolute_path("", "gcc-7"), "/gcc-7");
/// ```
pub fn absolute_path(base: &str, path: &str) -> String {
    let resolved = resolve_path(base, path);
    if resolved.starts_with('/') {
        resolved
    } else {
        normalize_path(&format!("/{}", resolved))
    }
}

/// Directory component of `path`, or the empty string when there is none.
///
/// ```
/// use toolchain_flags::path::parent_dir;
///
/// assert_eq!(parent_dir("/opt/gcc-8.0/bin/g++"), "/opt/gcc-8.0/bin");
/// assert_eq!(parent_dir("/g++"), "/");
/// assert_eq!(parent_dir("g++"), "");
/// ```
pub fn parent_dir(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        // "" has no parent, "/" is its own
        return if path.is_empty() { "" } else { "/" };
    }

    match trimmed.rfind('/') {
        Some(0) => "/",
        Some(idx) => &trimmed[..idx],
        None => "",
    }
}

/// Install root of a binary living at `<root>/bin/<name>`.
///
/// The last two components are stripped whatever they are called, and the
/// result is anchored like [`absolute_path`]. A path without a directory
/// component has no install root and yields an empty string.
pub fn install_root_of(binary: &str) -> String {
    let dir = parent_dir(binary);
    if dir.is_empty() {
        return String::new();
    }
    absolute_path(dir, "..")
}
