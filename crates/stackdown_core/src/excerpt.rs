/// Plain-text excerpt of an HTML body.
///
/// Tags are stripped without being interpreted, whitespace collapses, and a
/// result longer than `max_length` characters is cut at the word boundary
/// preceding the limit (the final, possibly clipped word is dropped) with an
/// ellipsis appended.
pub fn extract_excerpt(html: &str, max_length: usize) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        if in_tag {
            if ch == '>' {
                in_tag = false;
            }
        } else if ch == '<' {
            in_tag = true;
        } else {
            text.push(ch);
        }
    }
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_length {
        return collapsed;
    }
    let cut = collapsed
        .char_indices()
        .nth(max_length)
        .map(|(idx, _)| idx)
        .unwrap_or(collapsed.len());
    let prefix = collapsed[..cut].trim_end();
    let head = match prefix.rfind(' ') {
        Some(idx) => &prefix[..idx],
        None => prefix,
    };
    format!("{head}...")
}
