use std::sync::Arc;
use std::time::Duration;

use newsfeed_logging::{feed_debug, feed_warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::{EngineEvent, EventSink};

const MIN_PERIOD: Duration = Duration::from_millis(1);
/// Longest period the timer honours; longer requests are clamped.
pub const MAX_PERIOD: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Session-scoped repeating refresh timer. At most one task is live; dropping
/// the timer aborts it.
#[derive(Debug, Default)]
pub struct RefreshTimer {
    task: Option<JoinHandle<()>>,
}

impl RefreshTimer {
    /// True while a timer task is scheduled and still running.
    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Disarm, then start emitting [`EngineEvent::RefreshTick`] every `period`.
    /// The first tick comes one full period after arming.
    pub fn arm(&mut self, runtime: &Handle, period: Duration, sink: Arc<dyn EventSink>) {
        self.cancel();
        let (first, period) = first_deadline(Instant::now(), period.max(MIN_PERIOD));
        feed_debug!("Refresh timer armed with period {:?}", period);
        self.task = Some(runtime.spawn(async move {
            let mut ticker = interval_at(first, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                sink.emit(EngineEvent::RefreshTick);
            }
        }));
    }

    /// Returns whether a timer was running.
    pub fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                feed_debug!("Refresh timer cancelled");
                true
            }
            None => false,
        }
    }
}

fn first_deadline(now: Instant, period: Duration) -> (Instant, Duration) {
    match now.checked_add(period).filter(|_| period <= MAX_PERIOD) {
        Some(first) => (first, period),
        None => {
            feed_warn!(
                "Refresh period {:?} is too long; using {:?}",
                period,
                MAX_PERIOD
            );
            (now + MAX_PERIOD, MAX_PERIOD)
        }
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
