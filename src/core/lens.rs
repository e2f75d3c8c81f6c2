//! Field accessors over the structural model.
//!
//! A lens reads one field (or field group) and rebuilds the structure with
//! that field replaced. `set` consumes the source and returns a structural
//! copy, so no value is ever mutated in place.
//!
//! Laws, for every lens here unless its docs say otherwise:
//!
//! 1. `lens.get(&lens.set(f, s)) == f`
//! 2. `lens.set(lens.get(&s), s) == s`

use crate::core::codec::PathCodec;
use crate::types::{ParsedPath, ParsedUrl, Query};

/// A get/set pair focused on part of `S`.
pub trait Lens<S> {
    /// The focused value.
    type Focus;

    fn get(&self, source: &S) -> Self::Focus;

    fn set(&self, focus: Self::Focus, source: S) -> S;

    /// `set(f(get(source)), source)`
    fn modify<F>(&self, f: F, source: S) -> S
    where
        F: FnOnce(Self::Focus) -> Self::Focus,
    {
        let focus = f(self.get(&source));
        self.set(focus, source)
    }

    /// Focus further into this lens's focus.
    fn then<L>(self, inner: L) -> Compose<Self, L>
    where
        Self: Sized,
        L: Lens<Self::Focus>,
    {
        Compose { outer: self, inner }
    }
}

/// Two lenses chained: `outer` focuses `S -> A`, `inner` focuses `A -> B`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compose<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<S, Outer, Inner> Lens<S> for Compose<Outer, Inner>
where
    Outer: Lens<S>,
    Inner: Lens<Outer::Focus>,
{
    type Focus = Inner::Focus;

    fn get(&self, source: &S) -> Self::Focus {
        self.inner.get(&self.outer.get(source))
    }

    fn set(&self, focus: Self::Focus, source: S) -> S {
        let outer_focus = self.outer.get(&source);
        let updated = self.inner.set(focus, outer_focus);
        self.outer.set(updated, source)
    }
}

/// The decoded query mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryLens;

impl Lens<ParsedUrl> for QueryLens {
    type Focus = Query;

    fn get(&self, source: &ParsedUrl) -> Query {
        source.query.clone()
    }

    fn set(&self, query: Query, source: ParsedUrl) -> ParsedUrl {
        ParsedUrl { query, ..source }
    }
}

/// The pathname alone. The query is untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathnameLens;

impl Lens<ParsedUrl> for PathnameLens {
    type Focus = Option<String>;

    fn get(&self, source: &ParsedUrl) -> Option<String> {
        source.pathname.clone()
    }

    fn set(&self, pathname: Option<String>, source: ParsedUrl) -> ParsedUrl {
        ParsedUrl { pathname, ..source }
    }
}

/// Pathname and query together, as a [`ParsedPath`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLens;

impl Lens<ParsedUrl> for PathLens {
    type Focus = ParsedPath;

    fn get(&self, source: &ParsedUrl) -> ParsedPath {
        source.path()
    }

    fn set(&self, path: ParsedPath, source: ParsedUrl) -> ParsedUrl {
        ParsedUrl {
            pathname: path.pathname,
            query: path.query,
            ..source
        }
    }
}

/// The fragment, without `#`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashLens;

impl Lens<ParsedUrl> for HashLens {
    type Focus = Option<String>;

    fn get(&self, source: &ParsedUrl) -> Option<String> {
        source.hash.clone()
    }

    fn set(&self, hash: Option<String>, source: ParsedUrl) -> ParsedUrl {
        ParsedUrl { hash, ..source }
    }
}

/// A [`ParsedPath`] viewed as its serialized path string.
///
/// This lens goes through [`PathCodec`] and so only obeys the laws for
/// canonical input. Law 1 fails for strings the codec normalizes (`/a?b`
/// reads back as `/a?b=`). Law 2 fails for a query holding a one-element
/// [`QueryValue::Multiple`](crate::QueryValue::Multiple), which reads back
/// as `Single`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathStringLens;

impl Lens<ParsedPath> for PathStringLens {
    type Focus = Option<String>;

    fn get(&self, source: &ParsedPath) -> Option<String> {
        PathCodec::encode_nullable(source)
    }

    fn set(&self, path: Option<String>, _source: ParsedPath) -> ParsedPath {
        PathCodec::decode_nullable(path.as_deref())
    }
}

/// The path string of a URL: [`PathLens`] then [`PathStringLens`].
pub fn path_string_lens() -> Compose<PathLens, PathStringLens> {
    PathLens.then(PathStringLens)
}
