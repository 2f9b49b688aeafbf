//! Newsfeed core: pure fetch-and-refresh state machine, response validation and view-model helpers.
mod article;
mod effect;
mod failure;
mod msg;
mod query;
mod scheduler;
mod state;
mod update;
mod validate;
mod view_model;

pub use article::{Article, MAX_ARTICLES};
pub use effect::Effect;
pub use failure::{ErrorKind, FetchFailure};
pub use msg::Msg;
pub use query::{EmptyTermPolicy, Query, CATEGORIES, DEFAULT_TERM};
pub use scheduler::{FetchScheduler, FetchTicket, DEFAULT_REFRESH_PERIOD};
pub use state::{AppState, ControllerSettings, FetchResult};
pub use update::{start, update};
pub use validate::{validate_response, FetchOutcome, RawResponse, BODY_EXCERPT_CHARS};
pub use view_model::{AppViewModel, CategoryView, ViewStatus};
