/// Upper bound on articles kept from a single response.
pub const MAX_ARTICLES: usize = 10;

/// One normalized news item. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    title: String,
    description: Option<String>,
    url: String,
    image_url: Option<String>,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        url: impl Into<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description,
            url: url.into(),
            image_url,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Whether a card can be drawn for this article. Articles without an image
    /// stay in the model and are skipped by renderers.
    pub fn is_renderable(&self) -> bool {
        self.image_url
            .as_deref()
            .is_some_and(|image| !image.trim().is_empty())
    }
}
