use std::borrow::Cow;

// -----------------------------------------------------------------------------
// Type name shortening

fn is_path_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == ':'
}

fn push_last_segment(out: &mut String, word: &str) {
    out.push_str(word.rsplit("::").next().unwrap_or(word));
}

/// Strips module paths from a [`std::any::type_name`] result, including
/// inside generic arguments: `alloc::vec::Vec<my_crate::Node>` becomes
/// `Vec<Node>`.
pub(crate) fn short_type_name(full: &'static str) -> Cow<'static, str> {
    if !full.contains("::") {
        return Cow::Borrowed(full);
    }

    let mut out = String::with_capacity(full.len());
    let mut word = String::new();
    for ch in full.chars() {
        if is_path_char(ch) {
            word.push(ch);
        } else {
            push_last_segment(&mut out, &word);
            word.clear();
            out.push(ch);
        }
    }
    push_last_segment(&mut out, &word);
    Cow::Owned(out)
}

// -----------------------------------------------------------------------------
// Character-bounded truncation

/// Shortens `text` to at most `max_chars` characters. Never pads; strings at
/// or under the limit pass through unchanged.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => text[..cut].to_owned(),
        None => text.to_owned(),
    }
}
