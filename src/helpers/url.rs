//! URL helper functions

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URL component
///
/// # Examples
/// ```ignore
/// encode_component("a b&c") // -> "a%20b%26c"
/// ```
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Link to the detail page of a post
///
/// # Examples
/// ```ignore
/// post_url("post.html", "abc-123") // -> "post.html?id=abc-123"
/// ```
pub fn post_url(post_page: &str, id: &str) -> String {
    format!("{}?id={}", post_page, encode_component(id))
}

/// Read the first value of `name` from a query string
///
/// Accepts the string with or without its leading `?`. `+` decodes to a
/// space and invalid UTF-8 is replaced, as browsers do.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_form(key) == name).then(|| decode_form(value))
        })
}

fn decode_form(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_decode_str(&s).decode_utf8_lossy().into_owned()
}
