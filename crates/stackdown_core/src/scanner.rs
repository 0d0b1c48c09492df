/// One discrete signal derived from scanning an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEvent {
    Open {
        name: String,
        attrs: Vec<(String, String)>,
    },
    Close {
        name: String,
    },
    Text(String),
}

/// Forward-only scanner producing [`TagEvent`]s in document order.
///
/// The scanner never fails: a `<` that does not introduce a tag is emitted
/// as character data, comments and declarations are skipped, and an
/// unterminated tag at end of input is dropped.
pub struct TagScanner<'a> {
    rest: &'a str,
    pending_close: Option<String>,
}

/// Scan an HTML fragment into a stream of tag events.
pub fn scan(html: &str) -> TagScanner<'_> {
    TagScanner {
        rest: html,
        pending_close: None,
    }
}

impl Iterator for TagScanner<'_> {
    type Item = TagEvent;

    fn next(&mut self) -> Option<TagEvent> {
        if let Some(name) = self.pending_close.take() {
            return Some(TagEvent::Close { name });
        }
        loop {
            if self.rest.is_empty() {
                return None;
            }
            if !self.rest.starts_with('<') {
                let end = self.rest.find('<').unwrap_or(self.rest.len());
                let (raw, rest) = self.rest.split_at(end);
                self.rest = rest;
                return Some(TagEvent::Text(decode_entities(raw)));
            }
            if let Some(after) = self.rest.strip_prefix("<!--") {
                self.rest = match after.find("-->") {
                    Some(idx) => &after[idx + 3..],
                    None => "",
                };
                continue;
            }
            if self.rest.starts_with("<!") || self.rest.starts_with("<?") {
                self.rest = match self.rest.find('>') {
                    Some(idx) => &self.rest[idx + 1..],
                    None => "",
                };
                continue;
            }
            if let Some(after) = self.rest.strip_prefix("</") {
                let Some(idx) = after.find('>') else {
                    self.rest = "";
                    return None;
                };
                let name = after[..idx].trim().to_ascii_lowercase();
                self.rest = &after[idx + 1..];
                if name.is_empty() {
                    continue;
                }
                return Some(TagEvent::Close { name });
            }
            let mut lookahead = self.rest.chars();
            lookahead.next();
            if !lookahead.next().is_some_and(|c| c.is_ascii_alphabetic()) {
                // Literal '<' with no tag name after it.
                let end = self.rest[1..]
                    .find('<')
                    .map(|idx| idx + 1)
                    .unwrap_or(self.rest.len());
                let (raw, rest) = self.rest.split_at(end);
                self.rest = rest;
                return Some(TagEvent::Text(decode_entities(raw)));
            }
            match self.scan_open_tag() {
                Some(event) => return Some(event),
                None => return None,
            }
        }
    }
}

impl TagScanner<'_> {
    // `self.rest` starts with `<` followed by a tag name.
    fn scan_open_tag(&mut self) -> Option<TagEvent> {
        let body = &self.rest[1..];
        let mut end = None;
        let mut quote: Option<char> = None;
        for (idx, ch) in body.char_indices() {
            match quote {
                Some(open) if ch == open => quote = None,
                Some(_) => {}
                None => match ch {
                    '"' | '\'' => quote = Some(ch),
                    '>' => {
                        end = Some(idx);
                        break;
                    }
                    _ => {}
                },
            }
        }
        let Some(end) = end else {
            self.rest = "";
            return None;
        };
        let mut inner = &body[..end];
        self.rest = &body[end + 1..];

        let self_closing = inner.ends_with('/');
        if self_closing {
            inner = &inner[..inner.len() - 1];
        }
        let name_end = inner
            .find(|c: char| c.is_whitespace() || c == '/')
            .unwrap_or(inner.len());
        let name = inner[..name_end].to_ascii_lowercase();
        let attrs = parse_attrs(&inner[name_end..]);
        if self_closing {
            self.pending_close = Some(name.clone());
        }
        Some(TagEvent::Open { name, attrs })
    }
}

// Attribute names are lowercased, values entity-decoded. Quoted (single or
// double) and bare values are supported; a name without `=` yields an empty
// value.
fn parse_attrs(mut rest: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        if let Some(after) = rest.strip_prefix('/') {
            rest = after;
            continue;
        }
        let name_end = rest
            .find(|c: char| c.is_whitespace() || c == '=' || c == '/')
            .unwrap_or(rest.len());
        let name = rest[..name_end].to_ascii_lowercase();
        rest = rest[name_end..].trim_start();
        if name.is_empty() {
            let mut chars = rest.chars();
            chars.next();
            rest = chars.as_str();
            continue;
        }
        let value = if let Some(after) = rest.strip_prefix('=') {
            let after = after.trim_start();
            match after.chars().next() {
                Some(open @ ('"' | '\'')) => {
                    let inner = &after[1..];
                    match inner.find(open) {
                        Some(idx) => {
                            rest = &inner[idx + 1..];
                            inner[..idx].to_string()
                        }
                        None => {
                            rest = "";
                            inner.to_string()
                        }
                    }
                }
                _ => {
                    let end = after
                        .find(|c: char| c.is_whitespace())
                        .unwrap_or(after.len());
                    let value = after[..end].to_string();
                    rest = &after[end..];
                    value
                }
            }
        } else {
            String::new()
        };
        attrs.push((name, decode_entities(&value)));
    }
    attrs
}

fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match decode_entity(rest) {
            Some((decoded, consumed)) => {
                out.push(decoded);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

// Decodes one entity at the start of `rest` (which begins with '&').
// Returns the decoded char and the byte length consumed, or None to keep
// the ampersand literal.
fn decode_entity(rest: &str) -> Option<(char, usize)> {
    let semi = rest[1..].find(';').filter(|idx| *idx <= 10)? + 1;
    let body = &rest[1..semi];
    let decoded = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            let code = if let Some(hex) = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok()?
            } else {
                return None;
            };
            char::from_u32(code)?
        }
    };
    Some((decoded, semi + 1))
}

#[cfg(test)]
mod tests {
    use super::{scan, TagEvent};

    fn open(name: &str, attrs: &[(&str, &str)]) -> TagEvent {
        TagEvent::Open {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn close(name: &str) -> TagEvent {
        TagEvent::Close {
            name: name.to_string(),
        }
    }

    fn text(data: &str) -> TagEvent {
        TagEvent::Text(data.to_string())
    }

    #[test]
    fn open_text_close_in_document_order() {
        let events: Vec<_> = scan("<p>Hi</p>").collect();
        assert_eq!(events, vec![open("p", &[]), text("Hi"), close("p")]);
    }

    #[test]
    fn attributes_quoted_single_quoted_and_bare() {
        let events: Vec<_> = scan(r#"<a href="x" title='t' data=raw>"#).collect();
        assert_eq!(
            events,
            vec![open("a", &[("href", "x"), ("title", "t"), ("data", "raw")])]
        );
    }

    #[test]
    fn tag_names_and_attr_names_are_lowercased() {
        let events: Vec<_> = scan(r#"<IMG SRC="pic.png">"#).collect();
        assert_eq!(events, vec![open("img", &[("src", "pic.png")])]);
    }

    #[test]
    fn self_closing_tag_emits_open_then_close() {
        let events: Vec<_> = scan("<br/>after").collect();
        assert_eq!(events, vec![open("br", &[]), close("br"), text("after")]);
    }

    #[test]
    fn comments_and_doctype_are_skipped() {
        let events: Vec<_> = scan("<!DOCTYPE html><!-- note -->text").collect();
        assert_eq!(events, vec![text("text")]);
    }

    #[test]
    fn entities_are_decoded_in_text_and_attributes() {
        let events: Vec<_> = scan(r#"<a href="?a=1&amp;b=2">&lt;tag&gt; &#169;</a>"#).collect();
        assert_eq!(
            events,
            vec![
                open("a", &[("href", "?a=1&b=2")]),
                text("<tag> \u{a9}"),
                close("a"),
            ]
        );
    }

    #[test]
    fn unknown_entities_keep_their_ampersand() {
        let events: Vec<_> = scan("AT&T &bogusname; &#;").collect();
        assert_eq!(events, vec![text("AT&T &bogusname; &#;")]);
    }

    #[test]
    fn stray_angle_bracket_is_text() {
        let events: Vec<_> = scan("1 < 2").collect();
        assert_eq!(events, vec![text("1 "), text("< 2")]);
    }

    #[test]
    fn quoted_gt_does_not_end_the_tag() {
        let events: Vec<_> = scan(r#"<img alt="a > b">"#).collect();
        assert_eq!(events, vec![open("img", &[("alt", "a > b")])]);
    }

    #[test]
    fn unterminated_tag_is_dropped() {
        let events: Vec<_> = scan("before<a href=").collect();
        assert_eq!(events, vec![text("before")]);
    }
}
