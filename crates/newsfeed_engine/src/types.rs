use newsfeed_core::{FetchOutcome, FetchTicket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A fetch finished; the ticket is the one it was issued with.
    FetchCompleted {
        ticket: FetchTicket,
        outcome: FetchOutcome,
    },
    /// The refresh timer fired.
    RefreshTick,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(String),
}
