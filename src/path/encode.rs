use std::borrow::Cow;

pub fn encode_component(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Percent-decodes a captured path segment, keeping the raw text when the
/// decoded bytes are not valid UTF-8.
pub fn decode_component(value: &str) -> Cow<'_, str> {
    urlencoding::decode(value).unwrap_or(Cow::Borrowed(value))
}

pub fn encode_query<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                encode_component(key.as_ref()),
                encode_component(value.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(encode_component("hello world"), "hello%20world");
        assert_eq!(encode_component("a/b"), "a%2Fb");
        assert_eq!(encode_component("plain-text_1.0~"), "plain-text_1.0~");
    }

    #[test]
    fn decoding_falls_back_to_raw_on_invalid_utf8() {
        assert_eq!(decode_component("caf%C3%A9"), "café");
        assert_eq!(decode_component("%FF"), "%FF");
    }

    #[test]
    fn joins_query_pairs_in_order() {
        assert_eq!(
            encode_query(&[("search", "hello&world"), ("page", "2")]),
            "search=hello%26world&page=2"
        );
        assert_eq!(encode_query::<&str, &str>(&[]), "");
    }
}
