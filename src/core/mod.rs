//! Core building blocks of the decode -> update -> encode pipeline.
//!
//! This module contains:
//! - Codecs between serialized strings and structured values
//! - Lenses focused on single fields of a parsed URL
//! - The literal-or-function update combinator

pub mod codec;
pub mod lens;
pub mod update;

// Re-export main functionality
pub use codec::{Codec, PathCodec, UrlCodec};
pub use lens::{
    path_string_lens, Compose, HashLens, Lens, PathLens, PathStringLens, PathnameLens, QueryLens,
};
pub use update::Update;
