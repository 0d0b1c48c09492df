/// Publication identity used when a record carries no canonical URL.
///
/// Passed in explicitly so the pipeline can serve any publication rather
/// than baking one in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationConfig {
    name: String,
}

impl PublicationConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Display URL for a post: the canonical URL wins, then the publication's
/// post page derived from the slug, then the publication profile.
pub fn resolve_post_url(
    canonical_url: &str,
    slug: &str,
    publication: &PublicationConfig,
) -> String {
    if !canonical_url.is_empty() {
        canonical_url.to_string()
    } else if !slug.is_empty() {
        format!("https://{}.substack.com/p/{}", publication.name, slug)
    } else {
        format!("https://substack.com/@{}", publication.name)
    }
}
