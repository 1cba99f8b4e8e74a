use std::borrow::Cow;

/// Letters are whatever Unicode considers alphabetic, so accented words
/// in a word list stay searchable.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

fn is_lower(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() == Some(c) && lower.next().is_none()
}

/// Lower-case `s`. Borrows when there is nothing to change, which is the
/// common case for queries coming out of the search engine.
pub fn normalize(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_lower) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().flat_map(char::to_lowercase).collect())
    }
}
