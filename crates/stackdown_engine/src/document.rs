/// Field values for one document's metadata header.
#[derive(Debug, Clone, Copy)]
pub struct DocumentMeta<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub date: &'a str,
    pub display_date: &'a str,
    pub slug: &'a str,
    pub excerpt: &'a str,
    pub substack_url: &'a str,
}

/// Assemble the metadata header and rendered body into one document.
///
/// Header fields keep a fixed order and quoted values; embedded quotes and
/// backslashes are escaped so the block stays parseable.
pub fn build_document(meta: &DocumentMeta<'_>, body: &str) -> String {
    let mut doc = String::with_capacity(body.len() + 256);
    doc.push_str("---\n");
    push_field(&mut doc, "title", meta.title);
    push_field(&mut doc, "subtitle", meta.subtitle);
    push_field(&mut doc, "date", meta.date);
    push_field(&mut doc, "displayDate", meta.display_date);
    push_field(&mut doc, "slug", meta.slug);
    push_field(&mut doc, "excerpt", meta.excerpt);
    push_field(&mut doc, "substackUrl", meta.substack_url);
    doc.push_str("---\n\n");
    doc.push_str(body);
    doc
}

fn push_field(doc: &mut String, key: &str, value: &str) {
    doc.push_str(key);
    doc.push_str(": \"");
    for ch in value.chars() {
        match ch {
            '"' => doc.push_str("\\\""),
            '\\' => doc.push_str("\\\\"),
            _ => doc.push(ch),
        }
    }
    doc.push_str("\"\n");
}
