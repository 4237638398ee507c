use ::url::form_urlencoded;

use crate::types::QueryMap;

/// Last duplicate wins; a key without `=` maps to `""`.
pub fn parse_query(raw: &str) -> QueryMap {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    form_urlencoded::parse(raw.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}
