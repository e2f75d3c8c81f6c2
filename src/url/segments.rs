//! Pathname segment helpers.
//!
//! Segments are kept in their serialized form and never percent-decoded.
//! The encoder only escapes characters outside the path set and leaves
//! existing `%XX` escapes alone, so splitting, joining and encoding again
//! is idempotent.

/// Split a pathname into its non-empty segments.
///
/// Leading, trailing and doubled slashes collapse away.
///
/// # Examples
///
/// ```
/// use url_transformers::split_pathname;
///
/// assert_eq!(split_pathname("/api//v1/users/"), vec!["api", "v1", "users"]);
/// assert!(split_pathname("/").is_empty());
/// ```
pub fn split_pathname(pathname: &str) -> Vec<&str> {
    pathname.split('/').filter(|s| !s.is_empty()).collect()
}

/// Join segments into an absolute pathname. Zero segments yield `/`.
pub fn join_segments<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pathname = String::from("/");
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            pathname.push('/');
        }
        pathname.push_str(segment.as_ref());
    }
    pathname
}

/// Append the segments of `to_append` to those of `prev`.
///
/// An absent previous pathname counts as zero segments.
///
/// # Examples
///
/// ```
/// use url_transformers::append_pathname;
///
/// assert_eq!(append_pathname(Some("/foo/"), "/bar"), "/foo/bar");
/// assert_eq!(append_pathname(None, "bar"), "/bar");
/// ```
pub fn append_pathname(prev: Option<&str>, to_append: &str) -> String {
    let existing = prev.map(split_pathname).unwrap_or_default();
    join_segments(existing.into_iter().chain(split_pathname(to_append)))
}
