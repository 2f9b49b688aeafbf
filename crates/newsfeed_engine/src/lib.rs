//! Newsfeed engine: HTTP fetching, refresh timer and effect execution.
mod engine;
mod fetch;
mod settings;
mod timer;
mod types;

pub use engine::{fetch_outcome, ChannelEventSink, EngineHandle, EventSink};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use settings::{Endpoint, EngineSettings, NEWS_API_URL, PROXY_URL};
pub use timer::{RefreshTimer, MAX_PERIOD};
pub use types::{EngineError, EngineEvent};
