use std::collections::HashMap;

use url::{Url, form_urlencoded};

pub fn parse_query_string(qs: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (key, value) in form_urlencoded::parse(qs.as_bytes()).into_owned() {
        map.entry(key).or_insert(value);
    }

    map
}

/// Decoded value of the first `key` parameter in the query of `url`.
pub fn first_query_value(url: &Url, key: &str) -> Option<String> {
    url.query()
        .map(parse_query_string)
        .and_then(|mut params| params.remove(key))
}

/// The path segment right after `prefix`, e.g. `/embed/` in `/embed/<id>/...`.
pub fn path_segment_after(path: &str, prefix: &str) -> Option<String> {
    let rest = path.strip_prefix(prefix)?;
    rest.split('/').next().map(str::to_string)
}

/// The path of `input` exactly as typed, up to the query or fragment.
pub fn raw_path(input: &str) -> Option<&str> {
    let trimmed = input.trim_matches(|c: char| c <= ' ');
    let (_, after_scheme) = trimmed.split_once("://")?;
    let start = after_scheme.find(['/', '?', '#'])?;
    let rest = &after_scheme[start..];
    let end = rest.find(['?', '#']).unwrap_or(rest.len());

    Some(&rest[..end])
}

/// Picks the typed segment over the parsed one when `url` would encode the
/// typed text to exactly `parsed`. Otherwise the parser changed more than the
/// encoding (dot segments, backslashes) and `parsed` is kept.
pub fn as_typed(parsed: String, typed: Option<String>) -> String {
    match typed {
        Some(typed) if typed == parsed => parsed,
        Some(typed) if encodes_to(&typed, &parsed) => typed,
        _ => parsed,
    }
}

fn encodes_to(typed: &str, parsed: &str) -> bool {
    Url::parse(&format!("http://h/{typed}"))
        .is_ok_and(|url| url.path().strip_prefix('/') == Some(parsed))
}
