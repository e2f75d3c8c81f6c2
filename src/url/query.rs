//! Query string parsing and serialization.
//!
//! Uses `application/x-www-form-urlencoded` in both directions, the same
//! rules `url::Url::query_pairs` applies when reading.

use indexmap::IndexMap;
use url::form_urlencoded;

use crate::types::{Query, QueryValue};

/// Parse a raw query string (no leading `?`) into an ordered [`Query`].
///
/// A repeated key collapses into [`QueryValue::Multiple`] at the position of
/// its first occurrence. A key without `=` decodes to an empty value.
/// Escapes that are not UTF-8 decode lossily; [`UrlCodec`] rejects such
/// queries before they get here.
///
/// [`UrlCodec`]: crate::core::codec::UrlCodec
pub(crate) fn parse_query_string(raw: &str) -> Query {
    let mut entries: IndexMap<String, Vec<String>> = IndexMap::new();

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        entries
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }

    entries
        .into_iter()
        .map(|(key, mut values)| {
            let value = if values.len() == 1 {
                QueryValue::Single(values.remove(0))
            } else {
                QueryValue::Multiple(values)
            };
            (key, value)
        })
        .collect()
}

/// Serialize a [`Query`] without the leading `?`.
///
/// List values repeat the key once per element. An empty list emits nothing,
/// so the result can be empty even for a non-empty mapping.
pub(crate) fn serialize_query(query: &Query) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in query {
        for item in value.values() {
            serializer.append_pair(key, item);
        }
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_values() {
        let query = parse_query_string("foo=bar&page=1");
        assert_eq!(query, Query::new().with("foo", "bar").with("page", "1"));
    }

    #[test]
    fn test_parse_repeated_keys() {
        let query = parse_query_string("a=1&b=2&a=3");
        assert_eq!(query, Query::new().with("a", ["1", "3"]).with("b", "2"));
    }

    #[test]
    fn test_parse_many_repeats_keeps_order() {
        let raw: Vec<String> = (0..1000).map(|i| format!("k{}={}&r={}", i % 10, i, i)).collect();
        let query = parse_query_string(&raw.join("&"));

        let keys: Vec<&str> = query.keys().map(String::as_str).collect();
        assert_eq!(keys, ["k0", "r", "k1", "k2", "k3", "k4", "k5", "k6", "k7", "k8", "k9"]);
        assert_eq!(query.get("r").map(|v| v.values().len()), Some(1000));
        assert_eq!(query.get("k3").map(|v| v.values()[1].as_str()), Some("13"));
    }

    #[test]
    fn test_parse_decodes() {
        let query = parse_query_string("q=hello+world&name=caf%C3%A9&flag");
        assert_eq!(query.get("q"), Some(&QueryValue::from("hello world")));
        assert_eq!(query.get("name"), Some(&QueryValue::from("café")));
        assert_eq!(query.get("flag"), Some(&QueryValue::from("")));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_query_string("").is_empty());
    }

    #[test]
    fn test_serialize_lists_and_scalars() {
        let query = Query::new()
            .with("string", "string")
            .with("number", 1)
            .with("boolean", true)
            .with("strings", ["string1", "string2"]);

        assert_eq!(
            serialize_query(&query),
            "string=string&number=1&boolean=true&strings=string1&strings=string2"
        );
    }

    #[test]
    fn test_serialize_escapes() {
        let query = Query::new().with("q", "a b&c").with("k=", "é");
        assert_eq!(serialize_query(&query), "q=a+b%26c&k%3D=%C3%A9");
    }

    #[test]
    fn test_serialize_empty_list() {
        let query = Query::new().with("gone", Vec::<String>::new());
        assert_eq!(serialize_query(&query), "");
    }
}
