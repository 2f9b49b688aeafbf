//! Terminal front end: input surface, effect runner and renderer.
mod app;
mod effects;
mod input;
mod logging;
mod render;

pub use app::run_app;
pub use logging::LogDestination;
