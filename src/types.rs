//! Core data structures for URL transformations.
//!
//! Every type here is an immutable value. A [`ParsedUrl`] is produced by
//! decoding a string and is only ever replaced, field by field, through the
//! lenses in [`crate::core::lens`].

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::core::codec::{Codec, PathCodec, UrlCodec};
use crate::error::UrlTransformError;
use crate::url::query::{parse_query_string, serialize_query};

/// The value stored under one query key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A key that appears once (`a=1`)
    Single(String),
    /// A key repeated once per element, in order (`a=1&a=2`)
    Multiple(Vec<String>),
}

impl QueryValue {
    /// All values for the key, in serialization order.
    pub fn values(&self) -> &[String] {
        match self {
            QueryValue::Single(value) => std::slice::from_ref(value),
            QueryValue::Multiple(values) => values,
        }
    }

    /// The value when the key holds exactly one.
    pub fn as_single(&self) -> Option<&str> {
        match self.values() {
            [value] => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Single(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Single(value.clone())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::Multiple(values)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        QueryValue::Multiple(values.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for QueryValue {
    fn from(values: &[&str]) -> Self {
        QueryValue::Multiple(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for QueryValue {
    fn from(values: [&str; N]) -> Self {
        QueryValue::Multiple(values.iter().map(|v| v.to_string()).collect())
    }
}

macro_rules! scalar_query_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    QueryValue::Single(value.to_string())
                }
            }
        )*
    };
}

scalar_query_value!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Decoded query string: an insertion-ordered mapping with unique keys.
///
/// Equality is order-sensitive, since order determines serialization.
#[derive(Debug, Clone, Default)]
pub struct Query(IndexMap<String, QueryValue>);

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `key` set to `value`.
    ///
    /// An existing key keeps its position and has its value replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_transformers::Query;
    ///
    /// let query = Query::new().with("page", 2).with("tags", ["a", "b"]);
    /// assert_eq!(query.to_query_string(), "page=2&tags=a&tags=b");
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Return a copy without `key`, keeping the order of the others.
    pub fn without(mut self, key: &str) -> Self {
        self.0.shift_remove(key);
        self
    }

    /// Merge `other` over `self`.
    ///
    /// Keys in `other` override same-key entries in place. New keys are
    /// appended in `other`'s order. List values replace, they are never
    /// concatenated.
    pub fn merge(mut self, other: Query) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, QueryValue> {
        self.0.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, QueryValue> {
        self.0.keys()
    }

    /// Parse a raw query string (without the leading `?`).
    ///
    /// Escapes that are not UTF-8 decode to U+FFFD.
    pub fn parse(raw: &str) -> Self {
        parse_query_string(raw)
    }

    /// Serialize as `application/x-www-form-urlencoded`, without a `?`.
    pub fn to_query_string(&self) -> String {
        serialize_query(self)
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Query {}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    /// Later entries override earlier entries with the same key.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Query::new(), |query, (key, value)| query.with(key, value))
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = (&'a String, &'a QueryValue);
    type IntoIter = indexmap::map::Iter<'a, String, QueryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Query {
    type Item = (String, QueryValue);
    type IntoIter = indexmap::map::IntoIter<String, QueryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Credentials from the userinfo part of an authority, percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth {
    username: String,
    password: Option<String>,
}

impl Auth {
    /// Build credentials, or `None` when there is nothing to render.
    ///
    /// An empty password counts as no password.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_transformers::Auth;
    ///
    /// assert_eq!(Auth::from_parts("", None), None);
    /// assert_eq!(Auth::from_parts("a", Some("")).unwrap().to_userinfo(), "a");
    /// assert_eq!(Auth::from_parts("a", Some("b")).unwrap().to_userinfo(), "a:b");
    /// ```
    pub fn from_parts(username: &str, password: Option<&str>) -> Option<Self> {
        let password = password.filter(|p| !p.is_empty());
        if username.is_empty() && password.is_none() {
            return None;
        }

        Some(Self {
            username: username.to_string(),
            password: password.map(String::from),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Render as `user` or `user:password`, without the trailing `@`.
    pub fn to_userinfo(&self) -> String {
        match &self.password {
            Some(password) => format!("{}:{}", self.username, password),
            None => self.username.clone(),
        }
    }
}

/// The pathname and query of a URL, which serialize as one unit (`/path?query`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPath {
    pub(crate) pathname: Option<String>,
    pub(crate) query: Query,
}

impl ParsedPath {
    pub fn new(pathname: Option<String>, query: Query) -> Self {
        Self { pathname, query }
    }

    /// Split a path string at its first `?`. A `#fragment` tail is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_transformers::{ParsedPath, Query};
    ///
    /// let path = ParsedPath::from_path_str("/foo?a=b");
    /// assert_eq!(path.pathname(), Some("/foo"));
    /// assert_eq!(path.query(), &Query::new().with("a", "b"));
    ///
    /// assert_eq!(ParsedPath::from_path_str("?a=b").pathname(), None);
    /// assert_eq!(ParsedPath::from_path_str("/a#b").pathname(), Some("/a"));
    /// ```
    pub fn from_path_str(path: &str) -> Self {
        match PathCodec::decode(path) {
            Ok(parsed) => parsed,
            Err(never) => match never {},
        }
    }

    pub fn pathname(&self) -> Option<&str> {
        self.pathname.as_deref()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// True when there is neither a pathname nor a query.
    pub fn is_empty(&self) -> bool {
        self.pathname.as_deref().map_or(true, str::is_empty) && self.query.is_empty()
    }

    /// Serialize back to `/path?query`.
    pub fn to_path_string(&self) -> String {
        PathCodec::encode(self)
    }
}

/// The decoded, immutable, field-wise representation of a URL.
///
/// Only [`UrlCodec`] and the crate's lenses construct values of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub(crate) scheme: Option<String>,
    pub(crate) slashes: bool,
    pub(crate) auth: Option<Auth>,
    pub(crate) host: Option<String>,
    pub(crate) port: Option<u16>,
    pub(crate) pathname: Option<String>,
    pub(crate) query: Query,
    pub(crate) hash: Option<String>,
}

impl ParsedUrl {
    /// Decode a URL string or bare path.
    pub fn parse(input: &str) -> Result<Self, UrlTransformError> {
        UrlCodec::decode(input)
    }

    /// Encode back to a URL string.
    pub fn encode(&self) -> String {
        UrlCodec::encode(self)
    }

    /// Scheme without the trailing `:`, `None` for bare paths.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Whether the URL carries an authority (`//host`).
    pub fn has_authority(&self) -> bool {
        self.slashes
    }

    pub fn auth(&self) -> Option<&Auth> {
        self.auth.as_ref()
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Explicit, non-default port.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn pathname(&self) -> Option<&str> {
        self.pathname.as_deref()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Fragment without the leading `#`.
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// The pathname and query as one path object.
    pub fn path(&self) -> ParsedPath {
        ParsedPath::new(self.pathname.clone(), self.query.clone())
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for ParsedUrl {
    type Err = UrlTransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
