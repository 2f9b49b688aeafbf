use std::sync::{mpsc, Arc};

use newsfeed_core::{Effect, Msg};
use newsfeed_engine::{EngineError, EngineEvent, EngineHandle, EngineSettings, EventSink};
use newsfeed_logging::feed_info;

use super::app::LoopEvent;

/// Forwards engine events into the controller loop as messages.
struct MsgSink {
    tx: mpsc::Sender<LoopEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let msg = match event {
            EngineEvent::FetchCompleted { ticket, outcome } => {
                Msg::FetchCompleted { ticket, outcome }
            }
            EngineEvent::RefreshTick => Msg::RefreshTick,
        };
        let _ = self.tx.send(LoopEvent::Msg(msg));
    }
}

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: EngineSettings, tx: mpsc::Sender<LoopEvent>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings, Arc::new(MsgSink { tx }))?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match &effect {
                Effect::IssueFetch { ticket } => {
                    feed_info!(
                        "IssueFetch seq={} term={:?}",
                        ticket.seq,
                        ticket.query.term()
                    );
                }
                Effect::ArmTimer { period } => {
                    feed_info!("ArmTimer period={:?}", period);
                }
                Effect::CancelTimer => {
                    feed_info!("CancelTimer");
                }
            }
            self.engine.execute(effect);
        }
    }
}
