//! url-transformers - immutable, composable transformations over URL strings
//!
//! Every operation is a pure function: the URL string is decoded into an
//! immutable [`ParsedUrl`], one field is replaced through a lens, and the
//! result is encoded back to a string. The input is never mutated and no
//! state outlives a call.
//!
//! # Features
//!
//! - **Field isolation**: updating the query, path, pathname or hash leaves
//!   every other field as it was
//! - **Literal or function updates**: every replace operation takes an
//!   [`Update`], either a new value or a function of the previous one
//! - **Round-trip stable**: decoding an encoded URL yields the same
//!   structured value
//! - **Composable**: [`map_url`] runs several structure-level updates in one
//!   decode/encode pass
//!
//! # Quick Start
//!
//! ```
//! use url_transformers::{
//!     add_query_to_url, append_pathname_to_url, replace_hash_in_url, replace_query_in_url,
//!     Query, Update,
//! };
//!
//! let url = add_query_to_url("http://foo.com/", Query::new().with("strings", ["a", "b"]))?;
//! assert_eq!(url, "http://foo.com/?strings=a&strings=b");
//!
//! let url = append_pathname_to_url("https://foo.com/api/", "/v1/users")?;
//! assert_eq!(url, "https://foo.com/api/v1/users");
//!
//! let url = replace_query_in_url(
//!     "http://foo.com/?a=1&b=2",
//!     Update::transform(|prev: Query| prev.with("a", 3)),
//! )?;
//! assert_eq!(url, "http://foo.com/?a=3&b=2");
//!
//! assert_eq!(replace_hash_in_url("/foo#bar", None)?, "/foo");
//! # Ok::<(), url_transformers::UrlTransformError>(())
//! ```
//!
//! # Accepted inputs
//!
//! - Absolute URLs, parsed by the [`url`](https://docs.rs/url) crate
//! - Bare paths: empty strings and strings starting with `/`, `?` or `#`
//! - Scheme-relative URLs (`//host/path`)
//!
//! # Normalization
//!
//! | Situation | Output |
//! |-----------|--------|
//! | empty pathname, URL has a host | `/` |
//! | empty pathname, bare path | nothing |
//! | empty query | no `?` |
//! | empty or absent hash | no `#` |
//! | key without `=` (`?a`) | `a=` |
//! | default port (`:443` on https) | dropped |
//! | pathname starting with `//`, no host | prefixed with `/.` |
//! | `\` in a pathname | `%5C` for special schemes and bare paths, kept otherwise |
//!
//! # Error Handling
//!
//! Every string-level operation returns `Result<String, UrlTransformError>`.
//! Decoding is the only step that can fail; the error carries the original
//! input. A query whose escapes do not decode to UTF-8 (`?sig=%FF`) is
//! rejected rather than rewritten.

// Re-export main transformation functions
pub use crate::url::{
    add_query_to_parsed_url, add_query_to_url, append_pathname_to_parsed_url,
    append_pathname_to_url, map_url, replace_hash_in_parsed_url, replace_hash_in_url,
    replace_parsed_path_in_parsed_url, replace_parsed_path_in_url, replace_path_in_parsed_url,
    replace_path_in_url, replace_pathname_in_parsed_url, replace_pathname_in_url,
    replace_query_in_parsed_url, replace_query_in_url,
};

// Re-export helpers
pub use crate::url::{append_pathname, join_segments, split_pathname};

// Re-export public types
pub use crate::core::{
    path_string_lens, Codec, Compose, HashLens, Lens, PathCodec, PathLens, PathStringLens,
    PathnameLens, QueryLens, Update, UrlCodec,
};
pub use error::UrlTransformError;
pub use types::{Auth, ParsedPath, ParsedUrl, Query, QueryValue};

// Module declarations
pub mod core;
pub mod error;
pub mod types;
pub mod url;
