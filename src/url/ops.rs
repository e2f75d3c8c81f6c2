//! Public URL transformations.
//!
//! Each operation exists at two levels. The `*_in_parsed_url` functions
//! update a [`ParsedUrl`] through a lens. The `*_in_url` functions wrap
//! them in one decode/encode pass via [`map_url`] and are generated by
//! `url_operation!`, so both levels always share one implementation.

use crate::core::codec::{Codec, PathCodec, UrlCodec};
use crate::core::lens::{HashLens, PathLens, PathnameLens, QueryLens};
use crate::core::update::Update;
use crate::error::UrlTransformError;
use crate::types::{ParsedPath, ParsedUrl, Query};
use crate::url::segments;

/// Decode `url`, apply `f`, encode the result.
///
/// Use this to compose several updates in one pass.
///
/// # Examples
///
/// ```
/// use url_transformers::{map_url, replace_hash_in_parsed_url, replace_pathname_in_parsed_url};
///
/// let url = map_url("https://foo.com/bar#top", |parsed| {
///     let parsed = replace_pathname_in_parsed_url(parsed, "/foo");
///     replace_hash_in_parsed_url(parsed, None)
/// })?;
/// assert_eq!(url, "https://foo.com/foo");
/// # Ok::<(), url_transformers::UrlTransformError>(())
/// ```
pub fn map_url<F>(url: &str, f: F) -> Result<String, UrlTransformError>
where
    F: FnOnce(ParsedUrl) -> ParsedUrl,
{
    let parsed = UrlCodec::decode(url)?;
    Ok(UrlCodec::encode(&f(parsed)))
}

/// Replace the decoded query mapping.
pub fn replace_query_in_parsed_url<'a>(
    parsed: ParsedUrl,
    update: impl Into<Update<'a, Query>>,
) -> ParsedUrl {
    update.into().apply(&QueryLens, parsed)
}

/// Merge `to_append` over the existing query.
///
/// Same-key entries are overridden in place and new keys are appended. List
/// values replace, they are not concatenated.
pub fn add_query_to_parsed_url(parsed: ParsedUrl, to_append: Query) -> ParsedUrl {
    replace_query_in_parsed_url(parsed, Update::transform(move |prev: Query| prev.merge(to_append)))
}

/// Replace the pathname and query together as a path object.
pub fn replace_parsed_path_in_parsed_url<'a>(
    parsed: ParsedUrl,
    update: impl Into<Update<'a, ParsedPath>>,
) -> ParsedUrl {
    update.into().apply(&PathLens, parsed)
}

/// Replace the pathname and query together through the path string.
///
/// A transform receives the previous path string (`/path?query`, or `None`
/// when both are absent). Returning `None` clears pathname and query.
pub fn replace_path_in_parsed_url<'a>(
    parsed: ParsedUrl,
    update: impl Into<Update<'a, Option<String>>>,
) -> ParsedUrl {
    let update = update.into().map_focus(
        |path: Option<String>| PathCodec::decode_nullable(path.as_deref()),
        |path: ParsedPath| PathCodec::encode_nullable(&path),
    );
    replace_parsed_path_in_parsed_url(parsed, update)
}

/// Replace the pathname. The query is untouched.
pub fn replace_pathname_in_parsed_url<'a>(
    parsed: ParsedUrl,
    update: impl Into<Update<'a, Option<String>>>,
) -> ParsedUrl {
    update.into().apply(&PathnameLens, parsed)
}

/// Append the segments of `to_append` to the pathname.
pub fn append_pathname_to_parsed_url(parsed: ParsedUrl, to_append: &str) -> ParsedUrl {
    replace_pathname_in_parsed_url(
        parsed,
        Update::transform(|prev: Option<String>| {
            Some(segments::append_pathname(prev.as_deref(), to_append))
        }),
    )
}

/// Replace the fragment. One leading `#` on the new value is dropped, so
/// `"bar"` and `"#bar"` both set the fragment to `bar`. `None` or an empty
/// string removes it.
pub fn replace_hash_in_parsed_url<'a>(
    parsed: ParsedUrl,
    update: impl Into<Update<'a, Option<String>>>,
) -> ParsedUrl {
    update
        .into()
        .map_focus(strip_hash_marker, |hash| hash)
        .apply(&HashLens, parsed)
}

fn strip_hash_marker(hash: Option<String>) -> Option<String> {
    hash.map(|hash| match hash.strip_prefix('#') {
        Some(rest) => rest.to_string(),
        None => hash,
    })
}

macro_rules! url_operation {
    ($(
        $(#[$meta:meta])*
        pub fn $name:ident $(<$lt:lifetime>)? ($arg:ident: $ty:ty) => $inner:ident;
    )*) => {
        $(
            $(#[$meta])*
            pub fn $name $(<$lt>)? (url: &str, $arg: $ty) -> Result<String, UrlTransformError> {
                tracing::trace!(operation = stringify!($name), url, "transforming url");
                map_url(url, |parsed| $inner(parsed, $arg))
            }
        )*
    };
}

url_operation! {
    /// Replace the query of a URL string.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_transformers::{replace_query_in_url, Query, Update};
    ///
    /// let url = replace_query_in_url(
    ///     "http://foo.com/?a=1&b=2",
    ///     Update::transform(|prev: Query| prev.without("a")),
    /// )?;
    /// assert_eq!(url, "http://foo.com/?b=2");
    ///
    /// let url = replace_query_in_url("http://foo.com/?a=1", Query::new())?;
    /// assert_eq!(url, "http://foo.com/");
    /// # Ok::<(), url_transformers::UrlTransformError>(())
    /// ```
    pub fn replace_query_in_url<'a>(update: impl Into<Update<'a, Query>>) => replace_query_in_parsed_url;

    /// Merge query parameters into a URL string.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_transformers::{add_query_to_url, Query};
    ///
    /// let url = add_query_to_url("http://foo.com/?a=b&b=c", Query::new().with("c", "d"))?;
    /// assert_eq!(url, "http://foo.com/?a=b&b=c&c=d");
    /// # Ok::<(), url_transformers::UrlTransformError>(())
    /// ```
    pub fn add_query_to_url(to_append: Query) => add_query_to_parsed_url;

    /// Replace the path object of a URL string.
    pub fn replace_parsed_path_in_url<'a>(update: impl Into<Update<'a, ParsedPath>>) => replace_parsed_path_in_parsed_url;

    /// Replace the path (pathname and query) of a URL string.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_transformers::replace_path_in_url;
    ///
    /// let url = replace_path_in_url("https://foo.com/foo?example", "/bar?x=1")?;
    /// assert_eq!(url, "https://foo.com/bar?x=1");
    /// # Ok::<(), url_transformers::UrlTransformError>(())
    /// ```
    pub fn replace_path_in_url<'a>(update: impl Into<Update<'a, Option<String>>>) => replace_path_in_parsed_url;

    /// Replace the pathname of a URL string.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_transformers::replace_pathname_in_url;
    ///
    /// let url = replace_pathname_in_url("https://foo.com/foo?example=", "/bar")?;
    /// assert_eq!(url, "https://foo.com/bar?example=");
    /// # Ok::<(), url_transformers::UrlTransformError>(())
    /// ```
    pub fn replace_pathname_in_url<'a>(update: impl Into<Update<'a, Option<String>>>) => replace_pathname_in_parsed_url;

    /// Append path segments to a URL string.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_transformers::append_pathname_to_url;
    ///
    /// assert_eq!(append_pathname_to_url("/foo/", "/bar")?, "/foo/bar");
    /// assert_eq!(append_pathname_to_url("https://foo.com/@foo", "bar")?, "https://foo.com/@foo/bar");
    /// # Ok::<(), url_transformers::UrlTransformError>(())
    /// ```
    pub fn append_pathname_to_url<'a>(to_append: &'a str) => append_pathname_to_parsed_url;

    /// Replace the fragment of a URL string.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_transformers::replace_hash_in_url;
    ///
    /// assert_eq!(replace_hash_in_url("/foo", "bar")?, "/foo#bar");
    /// assert_eq!(replace_hash_in_url("/foo", "#bar")?, "/foo#bar");
    /// assert_eq!(replace_hash_in_url("/foo#bar", None)?, "/foo");
    /// # Ok::<(), url_transformers::UrlTransformError>(())
    /// ```
    pub fn replace_hash_in_url<'a>(update: impl Into<Update<'a, Option<String>>>) => replace_hash_in_parsed_url;
}
