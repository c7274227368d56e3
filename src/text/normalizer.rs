//! Text cleaning applied to every entry before vectorization.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<scheme>[A-Za-z][A-Za-z0-9+.\-]*)://\S+").expect("valid URL regex")
});
static NON_ALPHA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid character-class regex"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Schemes recognised at the end of a glued word such as `visithttp://`.
const KNOWN_SCHEMES: [&str; 3] = ["https", "http", "ftp"];

/// Text in front of a well-known scheme belongs to the previous word, so
/// `visithttp://x.co` keeps `visit`.
fn strip_url(caps: &Captures) -> String {
    let scheme = &caps["scheme"];
    let lower = scheme.to_ascii_lowercase();

    KNOWN_SCHEMES
        .iter()
        .find(|s| lower.ends_with(*s))
        .map(|s| scheme[..scheme.len() - s.len()].to_string())
        .unwrap_or_default()
}

/// Lowercase, drop URLs and anything that is not an ASCII letter or
/// whitespace, then collapse whitespace runs and trim.
///
/// `normalize(normalize(s)) == normalize(s)` for every input.
pub fn normalize(raw: &str) -> String {
    let text = URL_RE.replace_all(raw, strip_url);
    let text = NON_ALPHA_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_ascii_lowercase()
}
