//! Literal-or-function update descriptors.

use std::fmt;

use crate::core::lens::Lens;

/// A new value for a field: either the value itself or a function of the
/// previous value.
///
/// # Examples
///
/// ```
/// use url_transformers::Update;
///
/// assert_eq!(Update::literal(2).resolve(1), 2);
/// assert_eq!(Update::transform(|n: i32| n + 1).resolve(1), 2);
/// ```
pub enum Update<'a, T> {
    /// Replace the previous value.
    Literal(T),
    /// Compute the new value from the previous one.
    Transform(Box<dyn FnOnce(T) -> T + 'a>),
}

impl<'a, T> Update<'a, T> {
    pub fn literal(value: T) -> Self {
        Update::Literal(value)
    }

    pub fn transform<F>(f: F) -> Self
    where
        F: FnOnce(T) -> T + 'a,
    {
        Update::Transform(Box::new(f))
    }

    /// Resolve against the previous value.
    pub fn resolve(self, prev: T) -> T {
        match self {
            Update::Literal(value) => value,
            Update::Transform(f) => f(prev),
        }
    }

    /// Apply to the field `lens` focuses in `source`.
    ///
    /// Literals go through `set` without reading the field, transforms
    /// through `modify`.
    pub fn apply<S, L>(self, lens: &L, source: S) -> S
    where
        L: Lens<S, Focus = T>,
    {
        match self {
            Update::Literal(value) => lens.set(value, source),
            Update::Transform(f) => lens.modify(f, source),
        }
    }

    /// Turn this into an update over another representation of the same
    /// field, given conversions both ways.
    pub fn map_focus<U, To, Back>(self, into: To, from: Back) -> Update<'a, U>
    where
        T: 'a,
        U: 'a,
        To: Fn(T) -> U + 'a,
        Back: Fn(U) -> T + 'a,
    {
        match self {
            Update::Literal(value) => Update::Literal(into(value)),
            Update::Transform(f) => Update::transform(move |prev: U| into(f(from(prev)))),
        }
    }
}

impl<'a, T> From<T> for Update<'a, T> {
    fn from(value: T) -> Self {
        Update::Literal(value)
    }
}

impl<'a> From<&str> for Update<'a, Option<String>> {
    fn from(value: &str) -> Self {
        Update::Literal(Some(value.to_string()))
    }
}

impl<'a> From<String> for Update<'a, Option<String>> {
    fn from(value: String) -> Self {
        Update::Literal(Some(value))
    }
}

impl<T: fmt::Debug> fmt::Debug for Update<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Update::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Update::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lens::HashLens;
    use crate::types::ParsedUrl;

    #[test]
    fn test_resolve() {
        assert_eq!(Update::literal("new").resolve("old"), "new");
        assert_eq!(
            Update::transform(|prev: String| prev + "!").resolve("old".to_string()),
            "old!"
        );
    }

    #[test]
    fn test_transform_sees_previous_value() {
        let source = ParsedUrl::parse("/foo#bar").unwrap();
        let mut seen = None;

        let updated = Update::transform(|prev: Option<String>| {
            seen = prev.clone();
            prev.map(|h| h.to_uppercase())
        })
        .apply(&HashLens, source);

        assert_eq!(seen, Some("bar".to_string()));
        assert_eq!(updated.hash(), Some("BAR"));
    }

    #[test]
    fn test_from_conversions() {
        let update: Update<'_, Option<String>> = "x".into();
        assert_eq!(update.resolve(None), Some("x".to_string()));

        let update: Update<'_, Option<String>> = None.into();
        assert_eq!(update.resolve(Some("y".to_string())), None);
    }

    #[test]
    fn test_map_focus() {
        let update = Update::transform(|n: i32| n * 2).map_focus(
            |n: i32| n.to_string(),
            |s: String| s.parse::<i32>().unwrap_or_default(),
        );
        assert_eq!(update.resolve("21".to_string()), "42");

        let literal = Update::literal(7).map_focus(|n: i32| n.to_string(), |s: String| s.len() as i32);
        assert_eq!(literal.resolve(String::new()), "7");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Update::literal(1)), "Literal(1)");
        assert_eq!(format!("{:?}", Update::transform(|n: i32| n)), "Transform(..)");
    }
}
