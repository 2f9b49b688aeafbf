/// Term fetched when the controller starts.
pub const DEFAULT_TERM: &str = "Sri Lanka";

/// Category shortcuts offered next to the search box.
pub const CATEGORIES: [&str; 5] = ["sports", "politics", "entertainment", "health", "fitness"];

/// The effective search term. Stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    term: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self {
            term: raw.trim().to_string(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Case-insensitive match against a category name.
    pub fn matches_category(&self, category: &str) -> bool {
        self.term.eq_ignore_ascii_case(category)
    }
}

/// What to do when a fetch would be issued for a blank term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyTermPolicy {
    /// Issue nothing; the current view stays as it is.
    #[default]
    Suppress,
    /// Reset the term to the configured default and fetch that.
    FallbackToDefault,
}
