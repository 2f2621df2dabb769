//! Title slugification for detail page links.
//!
//! The slug is the last path segment of `{base}/app/nos-actualites/{id}/{slug}`
//! and must match what the site itself generates, so the steps below run in a
//! fixed order and are not normalised further. In particular a second pass
//! over an existing slug is not guaranteed to be a no-op.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters replaced before anything else. Position `i` maps to `TRANSLIT_TO[i]`.
const TRANSLIT_FROM: &str = "ãàáäâẽèéëêìíïîõòóöôùúüûñç·/_,:;";
const TRANSLIT_TO: &str = "aaaaaeeeeeiiiiooooouuuunc------";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
// ASCII-only word class; `\w` in `regex` is Unicode-aware.
static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\-]+").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

fn transliterate(c: char) -> char {
    TRANSLIT_FROM
        .chars()
        .position(|from| from == c)
        .and_then(|i| TRANSLIT_TO.chars().nth(i))
        .unwrap_or(c)
}

/// Convert a news title into the URL segment used by the site.
///
/// Steps, in order:
/// 1. replace accented lower-case letters and `·/_,:;` using a fixed table
/// 2. lower-case
/// 3. trim
/// 4. whitespace runs become `_`
/// 5. `&` becomes `-y-`
/// 6. drop everything outside `[A-Za-z0-9_-]`
/// 7. runs of two or more `-` become `_`
///
/// Upper-case accented letters are not in the table, so they are lower-cased
/// after step 1 and then dropped in step 6.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("Big News!"), "big_news");
/// assert_eq!(slugify("Crème brûlée"), "creme_brulee");
/// ```
pub fn slugify(text: &str) -> String {
    let transliterated: String = text.chars().map(transliterate).collect();
    let lowered = transliterated.to_lowercase();
    let spaced = WHITESPACE_RUN.replace_all(lowered.trim(), "_");
    let anded = spaced.replace('&', "-y-");
    let stripped = NON_SLUG_CHARS.replace_all(&anded, "");
    HYPHEN_RUN.replace_all(&stripped, "_").into_owned()
}
