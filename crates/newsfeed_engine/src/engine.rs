use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use newsfeed_core::{validate_response, Effect, FetchOutcome, FetchTicket};
use newsfeed_logging::{feed_debug, feed_info, feed_warn};

use crate::fetch::{Fetcher, ReqwestFetcher};
use crate::settings::{Endpoint, EngineSettings};
use crate::timer::RefreshTimer;
use crate::{EngineError, EngineEvent};

/// Receives engine events. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Fetch { ticket: FetchTicket },
    ArmTimer { period: Duration },
    CancelTimer,
    Shutdown,
}

/// Owns the tokio runtime and the refresh timer for one controller session.
///
/// Dropping the handle cancels the timer and stops the worker. In-flight
/// fetches are abandoned with the runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    worker: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let fetcher = Arc::new(ReqwestFetcher::new(settings.fetch)?);
        Self::with_fetcher(settings.endpoint, fetcher, sink)
    }

    pub fn with_fetcher(
        endpoint: Endpoint,
        fetcher: Arc<dyn Fetcher>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        feed_info!("Engine starting against {}", endpoint.describe());
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let endpoint = Arc::new(endpoint);

        let worker = thread::Builder::new()
            .name("newsfeed-engine".to_string())
            .spawn(move || run_worker(runtime, endpoint, fetcher, sink, cmd_rx))?;

        Ok(Self {
            cmd_tx,
            worker: Some(worker),
        })
    }

    pub fn issue(&self, ticket: FetchTicket) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch { ticket });
    }

    pub fn arm_timer(&self, period: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::ArmTimer { period });
    }

    pub fn cancel_timer(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelTimer);
    }

    pub fn execute(&self, effect: Effect) {
        match effect {
            Effect::IssueFetch { ticket } => self.issue(ticket),
            Effect::ArmTimer { period } => self.arm_timer(period),
            Effect::CancelTimer => self.cancel_timer(),
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                feed_warn!("Engine worker panicked during shutdown");
            }
        }
    }
}

fn run_worker(
    runtime: tokio::runtime::Runtime,
    endpoint: Arc<Endpoint>,
    fetcher: Arc<dyn Fetcher>,
    sink: Arc<dyn EventSink>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
) {
    let mut timer = RefreshTimer::default();
    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Fetch { ticket } => {
                let endpoint = endpoint.clone();
                let fetcher = fetcher.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    feed_debug!("Fetch seq={} term={:?} started", ticket.seq, ticket.query.term());
                    let outcome =
                        fetch_outcome(fetcher.as_ref(), &endpoint, ticket.query.term()).await;
                    sink.emit(EngineEvent::FetchCompleted { ticket, outcome });
                });
            }
            EngineCommand::ArmTimer { period } => {
                timer.arm(runtime.handle(), period, sink.clone());
            }
            EngineCommand::CancelTimer => {
                timer.cancel();
            }
            EngineCommand::Shutdown => break,
        }
    }
    timer.cancel();
    runtime.shutdown_background();
    feed_info!("Engine stopped");
}

/// Build the request, fetch it and classify the response.
pub async fn fetch_outcome(fetcher: &dyn Fetcher, endpoint: &Endpoint, term: &str) -> FetchOutcome {
    let url = match endpoint.request_url(term) {
        Ok(url) => url,
        Err(failure) => return failure.into(),
    };
    match fetcher.fetch(&url).await {
        Ok(raw) => validate_response(&raw),
        Err(failure) => failure.into(),
    }
}
