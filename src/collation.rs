//! Base-level title comparison: case and diacritics are ignored.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization as _;
use unicode_normalization::char::is_combining_mark;

/// Folds a title to its sort key: canonical decomposition, combining marks
/// dropped, lowercased, and letters without a decomposition mapped to their
/// base spelling.
#[must_use]
pub fn title_key(title: &str) -> String {
    let mut key = String::with_capacity(title.len());
    for ch in title.nfd().filter(|c| !is_combining_mark(*c)) {
        for lower in ch.to_lowercase() {
            match expand(lower) {
                Some(base) => key.push_str(base),
                None => key.push(lower),
            }
        }
    }
    key
}

#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    title_key(a).cmp(&title_key(b))
}

// Letters Unicode treats as distinct base characters rather than accented ones.
fn expand(ch: char) -> Option<&'static str> {
    let base = match ch {
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'ø' => "o",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ı' => "i",
        'ł' => "l",
        'ŧ' => "t",
        'þ' => "th",
        _ => return None,
    };
    Some(base)
}
