//! URL-level functionality built on the core codecs and lenses.
//!
//! This module contains:
//! - Query string parsing and serialization
//! - Pathname segment helpers
//! - The public replace/append operations

pub mod ops;
pub(crate) mod query;
pub mod segments;

// Re-export main functionality
pub use ops::{
    add_query_to_parsed_url, add_query_to_url, append_pathname_to_parsed_url,
    append_pathname_to_url, map_url, replace_hash_in_parsed_url, replace_hash_in_url,
    replace_parsed_path_in_parsed_url, replace_parsed_path_in_url, replace_path_in_parsed_url,
    replace_path_in_url, replace_pathname_in_parsed_url, replace_pathname_in_url,
    replace_query_in_parsed_url, replace_query_in_url,
};
pub use segments::{append_pathname, join_segments, split_pathname};
