// src/core/html.rs
// Case-insensitive scanning helpers over raw markup.
// Patterns are ASCII and matched byte-wise, so returned offsets are char boundaries in the source text.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

pub fn skip_ws(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && b[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// Case-insensitive `find` starting at byte `from`.
pub fn find_ci(hay: &str, needle: &str, from: usize) -> Option<usize> {
    let h = hay.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() {
        return (from <= h.len()).then_some(from);
    }
    if from > h.len() || n.len() > h.len() - from {
        return None;
    }
    (from..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// Non-overlapping case-insensitive substring count.
pub fn count_ci(hay: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut n = 0;
    let mut pos = 0;
    while let Some(i) = find_ci(hay, needle, pos) {
        n += 1;
        pos = i + needle.len();
    }
    n
}

/// Does `<\s*name\b` start at byte `i`?
pub fn open_tag_at(text: &str, i: usize, name: &str) -> bool {
    let b = text.as_bytes();
    if b.get(i) != Some(&b'<') {
        return false;
    }
    let j = skip_ws(b, i + 1);
    let end = j + name.len();
    end <= b.len()
        && b[j..end].eq_ignore_ascii_case(name.as_bytes())
        && b.get(end).is_none_or(|&c| !is_word_byte(c))
}

/// Next `<\s*name\b` at or after `from`.
pub fn find_open_tag_ci(text: &str, name: &str, from: usize) -> Option<usize> {
    let b = text.as_bytes();
    let mut i = from;
    while i < b.len() {
        let lt = i + text[i..].find('<')?;
        if open_tag_at(text, lt, name) {
            return Some(lt);
        }
        i = lt + 1;
    }
    None
}

/// Next `<\s*/\s*name\s*>` at or after `from`, as a byte range.
pub fn find_close_tag_ci(text: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let b = text.as_bytes();
    let mut i = from;
    while i < b.len() {
        let lt = i + text[i..].find('<')?;
        i = lt + 1;

        let mut j = skip_ws(b, lt + 1);
        if b.get(j) != Some(&b'/') {
            continue;
        }
        j = skip_ws(b, j + 1);
        let end = j + name.len();
        if end > b.len() || !b[j..end].eq_ignore_ascii_case(name.as_bytes()) {
            continue;
        }
        let k = skip_ws(b, end);
        if b.get(k) == Some(&b'>') {
            return Some((lt, k + 1));
        }
    }
    None
}
