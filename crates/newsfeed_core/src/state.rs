use std::time::Duration;

use newsfeed_logging::{feed_debug, feed_info, feed_warn};

use crate::view_model::{AppViewModel, CategoryView, ViewStatus};
use crate::{
    Article, EmptyTermPolicy, FetchFailure, FetchOutcome, FetchScheduler, FetchTicket, Query,
    CATEGORIES, DEFAULT_REFRESH_PERIOD, DEFAULT_TERM, MAX_ARTICLES,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    pub default_term: String,
    pub refresh_period: Duration,
    pub empty_term_policy: EmptyTermPolicy,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            default_term: DEFAULT_TERM.to_string(),
            refresh_period: DEFAULT_REFRESH_PERIOD,
            empty_term_policy: EmptyTermPolicy::default(),
        }
    }
}

/// Outcome of the most recent non-stale fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchResult {
    #[default]
    Idle,
    Loading { query: Query },
    Success { articles: Vec<Article> },
    Empty { query: Query },
    Failure(FetchFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    settings: ControllerSettings,
    query: Query,
    result: FetchResult,
    scheduler: FetchScheduler,
    active: bool,
    dirty: bool,
}

impl AppState {
    pub fn new(settings: ControllerSettings) -> Self {
        Self {
            query: Query::new(&settings.default_term),
            scheduler: FetchScheduler::new(settings.refresh_period),
            settings,
            result: FetchResult::Idle,
            active: false,
            dirty: false,
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn result(&self) -> &FetchResult {
        &self.result
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_timer_armed(&self) -> bool {
        self.scheduler.is_timer_armed()
    }

    pub fn view(&self) -> AppViewModel {
        let status = match &self.result {
            FetchResult::Idle => ViewStatus::Idle,
            FetchResult::Loading { query } => ViewStatus::Loading {
                term: query.term().to_string(),
            },
            FetchResult::Success { articles } => ViewStatus::Success {
                articles: articles.clone(),
            },
            FetchResult::Empty { query } => ViewStatus::Empty {
                term: query.term().to_string(),
            },
            FetchResult::Failure(failure) => ViewStatus::error(failure),
        };
        let loading = matches!(self.result, FetchResult::Loading { .. });
        AppViewModel {
            term: self.query.term().to_string(),
            loading,
            categories: CATEGORIES
                .iter()
                .map(|&name| CategoryView {
                    name,
                    active: self.query.matches_category(name),
                })
                .collect(),
            status,
            refresh_period: self.settings.refresh_period,
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn scheduler_mut(&mut self) -> &mut FetchScheduler {
        &mut self.scheduler
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Replaces the current query. Returns `false` if nothing changed.
    pub(crate) fn set_query(&mut self, query: Query) -> bool {
        if self.query == query {
            return false;
        }
        feed_debug!(
            "Query changed from {:?} to {:?}; in-flight results for the old term are now stale",
            self.query.term(),
            query.term()
        );
        self.query = query;
        self.dirty = true;
        true
    }

    /// The query a fetch should be issued for, honouring the blank-term policy.
    pub(crate) fn fetchable_query(&mut self) -> Option<Query> {
        if !self.query.is_empty() {
            return Some(self.query.clone());
        }
        match self.settings.empty_term_policy {
            EmptyTermPolicy::Suppress => {
                feed_debug!("Blank search term; fetch suppressed");
                None
            }
            EmptyTermPolicy::FallbackToDefault => {
                let fallback = Query::new(&self.settings.default_term);
                if fallback.is_empty() {
                    return None;
                }
                self.set_query(fallback.clone());
                Some(fallback)
            }
        }
    }

    pub(crate) fn mark_loading(&mut self, query: Query) {
        self.result = FetchResult::Loading { query };
        self.dirty = true;
    }

    /// Applies a completed fetch if its ticket is still current.
    pub(crate) fn apply_completion(&mut self, ticket: FetchTicket, outcome: FetchOutcome) -> bool {
        if !self.scheduler.accept(&ticket, &self.query) {
            feed_debug!(
                "Dropping stale result seq={} term={:?} (current term {:?})",
                ticket.seq,
                ticket.query.term(),
                self.query.term()
            );
            return false;
        }

        self.result = match outcome {
            FetchOutcome::Articles(mut articles) if !articles.is_empty() => {
                articles.truncate(MAX_ARTICLES);
                feed_info!(
                    "Applied {} articles for seq={} term={:?}",
                    articles.len(),
                    ticket.seq,
                    ticket.query.term()
                );
                FetchResult::Success { articles }
            }
            FetchOutcome::Articles(_) | FetchOutcome::Empty => {
                feed_info!("No articles for seq={} term={:?}", ticket.seq, ticket.query.term());
                FetchResult::Empty {
                    query: ticket.query,
                }
            }
            FetchOutcome::Failed(failure) => {
                feed_warn!(
                    "Fetch seq={} term={:?} failed: {}",
                    ticket.seq,
                    ticket.query.term(),
                    failure
                );
                FetchResult::Failure(failure)
            }
        };
        self.dirty = true;
        true
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ControllerSettings::default())
    }
}
