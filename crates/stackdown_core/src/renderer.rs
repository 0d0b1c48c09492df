use crate::scanner::{scan, TagEvent};

/// Whole-body HTML to Markdown conversion.
pub trait Converter: Send + Sync {
    fn to_markdown(&self, html: &str) -> String;
}

/// Converter that feeds the forward-only tag scanner into a fresh
/// [`MarkdownRenderer`] per body.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagStreamConverter;

impl Converter for TagStreamConverter {
    fn to_markdown(&self, html: &str) -> String {
        let mut renderer = MarkdownRenderer::new();
        for event in scan(html) {
            match event {
                TagEvent::Open { name, attrs } => renderer.handle_open(&name, &attrs),
                TagEvent::Close { name } => renderer.handle_close(&name),
                TagEvent::Text(text) => renderer.handle_text(&text),
            }
        }
        renderer.finish()
    }
}

/// Streaming tag-driven state machine mapping a constrained HTML subset to
/// Markdown.
///
/// The renderer trusts the event stream's nesting implicitly and never
/// fails: a close without a matching open is ignored (anchors) or floored
/// at zero (lists), and unclosed tags at end of stream leave residual
/// formatting rather than an error. Output is append-only.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    output: String,
    list_depth: usize,
    verbatim: bool,
    pending_link: Option<String>,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_open(&mut self, name: &str, attrs: &[(String, String)]) {
        match name {
            "h1" => self.output.push_str("\n# "),
            "h2" => self.output.push_str("\n## "),
            "h3" => self.output.push_str("\n### "),
            "h4" => self.output.push_str("\n#### "),
            "p" => self.output.push_str("\n\n"),
            "br" => self.output.push('\n'),
            "strong" | "b" => self.output.push_str("**"),
            "em" | "i" => self.output.push('*'),
            "code" => {
                // Inside a fence the backticks would corrupt the block.
                if !self.verbatim {
                    self.output.push('`');
                }
            }
            "pre" => {
                self.output.push_str("\n```\n");
                self.verbatim = true;
            }
            "a" => {
                let href = attr(attrs, "href").unwrap_or_default();
                self.pending_link = Some(href.to_string());
                self.output.push('[');
            }
            "img" => {
                let alt = attr(attrs, "alt").unwrap_or("image");
                let src = attr(attrs, "src").unwrap_or_default();
                self.output.push_str("\n\n![");
                self.output.push_str(alt);
                self.output.push_str("](");
                self.output.push_str(src);
                self.output.push_str(")\n\n");
            }
            "ul" | "ol" => self.list_depth += 1,
            "li" => {
                self.output.push('\n');
                for _ in 0..self.list_depth.saturating_sub(1) {
                    self.output.push_str("  ");
                }
                self.output.push_str("- ");
            }
            "blockquote" => self.output.push_str("\n> "),
            _ => {}
        }
    }

    pub fn handle_close(&mut self, name: &str) {
        match name {
            "strong" | "b" => self.output.push_str("**"),
            "em" | "i" => self.output.push('*'),
            "code" => {
                if !self.verbatim {
                    self.output.push('`');
                }
            }
            "pre" => {
                self.output.push_str("\n```\n");
                self.verbatim = false;
            }
            "a" => {
                if let Some(href) = self.pending_link.take() {
                    self.output.push_str("](");
                    self.output.push_str(&href);
                    self.output.push(')');
                }
            }
            "ul" | "ol" => {
                self.list_depth = self.list_depth.saturating_sub(1);
                self.output.push('\n');
            }
            _ => {}
        }
    }

    pub fn handle_text(&mut self, text: &str) {
        if self.verbatim {
            self.output.push_str(text);
            return;
        }
        let mut words = text.split_whitespace();
        if let Some(first) = words.next() {
            self.output.push_str(first);
            for word in words {
                self.output.push(' ');
                self.output.push_str(word);
            }
        }
    }

    /// Consumes the renderer, returning the assembled Markdown with outer
    /// whitespace trimmed.
    pub fn finish(self) -> String {
        self.output.trim().to_string()
    }
}

fn attr<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(key, _)| key.as_str() == name)
        .map(|(_, value)| value.as_str())
}
