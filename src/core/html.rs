// src/core/html.rs
//! Tolerant, allocation-light HTML scanning. No DOM: callers slice the
//! document into tag blocks and read attributes/text out of them.

use super::sanitize::{normalize_entities, normalize_ws};

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

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Visible text of a block: tags stripped, entities and whitespace normalized.
pub fn block_text(block: &str) -> String {
    strip_tags(normalize_entities(&inner_after_open_tag(block)))
}

/// The opening tag of a block (`<div class="x">`), or the whole block if unterminated.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(gt) => &block[..=gt],
        None => block,
    }
}

/// Attribute value from an opening tag. Accepts double, single, or no quotes.
pub fn attr(open: &str, name: &str) -> Option<String> {
    let lc = to_lower(open);
    let needle = to_lower(name);
    let bytes = lc.as_bytes();
    let mut from = 0usize;

    while let Some(rel) = lc[from..].find(&needle) {
        let at = from + rel;
        from = at + needle.len();

        // must be a whole attribute name
        let before_ok = at > 0 && (bytes[at - 1].is_ascii_whitespace());
        let mut i = at + needle.len();
        while i < bytes.len() && bytes[i].is_ascii_whitespace() { i += 1; }
        if !before_ok || i >= bytes.len() || bytes[i] != b'=' { continue; }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() { i += 1; }
        if i >= bytes.len() { return None; }

        let value = match bytes[i] {
            q @ (b'"' | b'\'') => {
                let end = open[i + 1..].find(q as char)? + i + 1;
                &open[i + 1..end]
            }
            _ => {
                let end = open[i..]
                    .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                    .map_or(open.len(), |e| e + i);
                &open[i..end]
            }
        };
        return Some(normalize_entities(value));
    }
    None
}

/// True if the opening tag's `class` attribute carries every token of `classes`.
pub fn has_classes(open: &str, classes: &str) -> bool {
    match attr(open, "class") {
        Some(value) => {
            let have: Vec<&str> = value.split_ascii_whitespace().collect();
            classes.split_ascii_whitespace().all(|want| have.contains(&want))
        }
        None => false,
    }
}

/// Byte offset just past the `</tag>` that closes the element opened at `start`.
/// Counts nested elements of the same name. `lc` is the document already
/// passed through `to_lower`, which keeps byte offsets intact.
fn matching_close(lc: &str, open_pat: &str, close_pat: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut pos = start;

    loop {
        let next_open = find_tag(lc, open_pat, pos);
        let next_close = find_tag(lc, close_pat, pos)?;

        match next_open {
            Some(o) if o < next_close => {
                depth += 1;
                pos = o + open_pat.len();
            }
            _ => {
                depth = depth.checked_sub(1)?;
                let gt = lc[next_close..].find('>')? + next_close + 1;
                if depth == 0 {
                    return Some(gt);
                }
                pos = gt;
            }
        }
    }
}

/// Find `<tag` / `</tag` followed by a name boundary, so `<span` skips `<spanner`.
fn find_tag(lc: &str, pat: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(pat)? + pos;
        let after = lc.as_bytes().get(at + pat.len()).copied();
        match after {
            Some(b) if b.is_ascii_whitespace() || b == b'>' || b == b'/' => return Some(at),
            None => return None,
            _ => pos = at + pat.len(),
        }
    }
}

/// Every `<tag class="…">…</tag>` element (outermost first, document order)
/// whose class list contains all of `classes`. Nested matches are included.
pub fn blocks_with_class<'a>(doc: &'a str, tag: &str, classes: &str) -> Vec<&'a str> {
    let lc = to_lower(doc);
    let open_pat = join!("<", &to_lower(tag));
    let close_pat = join!("</", &to_lower(tag));
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some(start) = find_tag(&lc, &open_pat, pos) {
        pos = start + open_pat.len();
        let Some(gt) = doc[start..].find('>').map(|g| g + start) else { break };
        if !has_classes(&doc[start..=gt], classes) {
            continue;
        }
        if let Some(end) = matching_close(&lc, &open_pat, &close_pat, start) {
            out.push(&doc[start..end]);
        }
    }
    out
}

/// First matching element, if any.
pub fn first_with_class<'a>(doc: &'a str, tag: &str, classes: &str) -> Option<&'a str> {
    blocks_with_class(doc, tag, classes).into_iter().next()
}

/// Visible text of the first matching element.
pub fn text_of_class(doc: &str, tag: &str, classes: &str) -> Option<String> {
    first_with_class(doc, tag, classes).map(block_text)
}

/// Visible text of every matching element, document order.
pub fn texts_of_class(doc: &str, tag: &str, classes: &str) -> Vec<String> {
    blocks_with_class(doc, tag, classes).into_iter().map(block_text).collect()
}
