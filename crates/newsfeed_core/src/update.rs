use newsfeed_logging::feed_debug;

use crate::{AppState, ControllerSettings, Effect, Msg, Query};

/// Creates the controller and runs its initial fetch.
pub fn start(settings: ControllerSettings) -> (AppState, Vec<Effect>) {
    update(AppState::new(settings), Msg::Started)
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if !state.is_active() && !matches!(msg, Msg::Started) {
        feed_debug!("Controller inactive; ignoring {:?}", msg);
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Started => {
            state.set_active(true);
            schedule_current(&mut state)
        }
        Msg::InputChanged(raw) => {
            // Typing never fetches, but it re-arms the timer so the next
            // refresh targets the new term.
            if state.set_query(Query::new(&raw)) {
                vec![state.scheduler_mut().rearm()]
            } else {
                Vec::new()
            }
        }
        Msg::SearchSubmitted => schedule_current(&mut state),
        Msg::CategorySelected(name) => {
            state.set_query(Query::new(&name));
            schedule_current(&mut state)
        }
        Msg::RetryClicked | Msg::RefreshTick => issue_current(&mut state),
        Msg::FetchCompleted { ticket, outcome } => {
            state.apply_completion(ticket, outcome);
            Vec::new()
        }
        Msg::Teardown => {
            state.set_active(false);
            state.scheduler_mut().cancel().into_iter().collect()
        }
    };

    (state, effects)
}

fn schedule_current(state: &mut AppState) -> Vec<Effect> {
    let Some(query) = state.fetchable_query() else {
        return Vec::new();
    };
    state.mark_loading(query.clone());
    state.scheduler_mut().schedule(&query)
}

fn issue_current(state: &mut AppState) -> Vec<Effect> {
    let before = state.query().clone();
    let Some(query) = state.fetchable_query() else {
        return Vec::new();
    };
    state.mark_loading(query.clone());
    let mut effects = vec![state.scheduler_mut().issue(&query)];
    // A blank term replaced by the default is still a query change.
    if query != before {
        effects.push(state.scheduler_mut().rearm());
    }
    effects
}
