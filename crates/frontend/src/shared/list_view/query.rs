use std::borrow::Cow;

/// Упорядоченный multimap параметров query string.
///
/// Повторяющиеся ключи (`store_ids=1&store_ids=2`) сохраняются все и в
/// исходном порядке. Разбор никогда не падает: битое percent-кодирование
/// оставляется как есть.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

fn decode_component(raw: &str) -> String {
    let plus_as_space: Cow<str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    match urlencoding::decode(&plus_as_space) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => plus_as_space.into_owned(),
    }
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `?a=1&b=2`, with or without the leading `?`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim().trim_start_matches('?');
        let pairs = raw
            .split('&')
            .filter(|part| !part.is_empty())
            .filter_map(|part| {
                let (key, value) = part.split_once('=').unwrap_or((part, ""));
                let key = decode_component(key);
                if key.is_empty() {
                    None
                } else {
                    Some((key, decode_component(value)))
                }
            })
            .collect();
        Self { pairs }
    }

    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Serializes without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repeated_keys() {
        let q = QueryParams::parse("?store_ids=1&page=2&store_ids=3");
        assert_eq!(q.all("store_ids"), vec!["1", "3"]);
        assert_eq!(q.first("page"), Some("2"));
        assert_eq!(q.first("missing"), None);
    }

    #[test]
    fn test_parse_decodes_values() {
        let q = QueryParams::parse("search=blue+shirt&type=T%2DShirts&flag");
        assert_eq!(q.first("search"), Some("blue shirt"));
        assert_eq!(q.first("type"), Some("T-Shirts"));
        assert_eq!(q.first("flag"), Some(""));
    }

    #[test]
    fn test_parse_garbage_never_fails() {
        let q = QueryParams::parse("&&=x&bad=%E0%A4%A&page");
        assert!(q.first("bad").is_some());
        assert_eq!(q.first("page"), Some(""));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_encode_roundtrip() {
        let mut q = QueryParams::new();
        q.push("search", "a&b c");
        q.push("store_ids", "1");
        let encoded = q.to_query_string();
        assert_eq!(encoded, "search=a%26b%20c&store_ids=1");
        assert_eq!(QueryParams::parse(&encoded), q);
    }
}
