//! Path prefix scoping
//!
//! A scope presents a sub-tree of the remote namespace as its own root. The
//! API always speaks in full paths (`/me/photos/2024/cat.jpg`); callers of a
//! scope rooted at `/me/photos` only ever see `/2024/cat.jpg`.

/// Remove `prefix` from the start of `path`.
///
/// A path that does not start with `prefix` is returned unchanged.
pub fn strip_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    path.strip_prefix(prefix).unwrap_or(path)
}

/// Normalize a relative path to `/a/b` form, or to the empty string for the
/// root. Leading, trailing and repeated slashes are dropped.
pub fn normalize_path(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .fold(String::new(), |mut acc, segment| {
            acc.push('/');
            acc.push_str(segment);
            acc
        })
}

/// Build the prefix for a scope rooted at `root` under the remote folder
/// `root_folder_id`, e.g. `("me", "photos/")` gives `/me/photos`.
pub fn scope_prefix(root_folder_id: &str, root: &str) -> String {
    format!(
        "{}{}",
        normalize_path(root_folder_id),
        normalize_path(root)
    )
}
