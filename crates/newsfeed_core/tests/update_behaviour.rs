use std::sync::Once;
use std::time::Duration;

use newsfeed_core::{
    start, update, Article, ControllerSettings, Effect, EmptyTermPolicy, ErrorKind, FetchFailure,
    FetchOutcome, FetchResult, FetchTicket, Msg, Query, ViewStatus, DEFAULT_REFRESH_PERIOD,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(newsfeed_logging::initialize_for_tests);
}

fn issued_ticket(effects: &[Effect]) -> FetchTicket {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::IssueFetch { ticket } => Some(ticket.clone()),
            _ => None,
        })
        .expect("issue effect")
}

fn article(n: usize) -> Article {
    Article::new(
        format!("Headline {n}"),
        Some(format!("Summary {n}")),
        format!("https://news.example.com/{n}"),
        Some(format!("https://img.example.com/{n}.jpg")),
    )
}

#[test]
fn start_fetches_default_term_and_arms_timer() {
    init_logging();
    let (state, effects) = start(ControllerSettings::default());

    assert_eq!(
        effects,
        vec![
            Effect::IssueFetch {
                ticket: FetchTicket {
                    seq: 1,
                    query: Query::new("Sri Lanka"),
                },
            },
            Effect::ArmTimer {
                period: DEFAULT_REFRESH_PERIOD,
            },
        ]
    );
    let view = state.view();
    assert_eq!(
        view.status,
        ViewStatus::Loading {
            term: "Sri Lanka".to_string()
        }
    );
    assert!(view.loading);
    assert!(state.is_timer_armed());
}

#[test]
fn input_changed_rearms_without_fetching() {
    init_logging();
    let (state, _) = start(ControllerSettings::default());

    let (mut state, effects) = update(state, Msg::InputChanged("  climate ".to_string()));

    assert_eq!(
        effects,
        vec![Effect::ArmTimer {
            period: DEFAULT_REFRESH_PERIOD
        }]
    );
    assert_eq!(state.query().term(), "climate");
    assert!(state.consume_dirty());

    // Same term after trimming is not a change.
    let (mut state, effects) = update(state, Msg::InputChanged("climate".to_string()));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn submit_fetches_current_term() {
    init_logging();
    let (state, _) = start(ControllerSettings::default());
    let (state, _) = update(state, Msg::InputChanged("climate".to_string()));

    let (state, effects) = update(state, Msg::SearchSubmitted);

    let ticket = issued_ticket(&effects);
    assert_eq!(ticket.query, Query::new("climate"));
    assert!(effects.contains(&Effect::ArmTimer {
        period: DEFAULT_REFRESH_PERIOD
    }));
    assert_eq!(
        state.result(),
        &FetchResult::Loading {
            query: Query::new("climate")
        }
    );
}

#[test]
fn category_selection_sets_term_and_fetches_immediately() {
    init_logging();
    let (state, _) = start(ControllerSettings::default());

    let (state, effects) = update(state, Msg::CategorySelected("sports".to_string()));

    assert_eq!(issued_ticket(&effects).query, Query::new("sports"));
    let view = state.view();
    assert_eq!(view.term, "sports");
    let active: Vec<_> = view
        .categories
        .iter()
        .filter(|category| category.active)
        .map(|category| category.name)
        .collect();
    assert_eq!(active, vec!["sports"]);
}

#[test]
fn retry_reissues_current_query_without_rearming() {
    init_logging();
    let (state, effects) = start(ControllerSettings::default());
    let ticket = issued_ticket(&effects);
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            ticket,
            outcome: FetchOutcome::Failed(FetchFailure::new(
                ErrorKind::NetworkFailure,
                "connection refused",
            )),
        },
    );

    let (state, effects) = update(state, Msg::RetryClicked);

    assert_eq!(effects.len(), 1);
    let retry = issued_ticket(&effects);
    assert_eq!(retry.seq, 2);
    assert_eq!(retry.query, Query::new("Sri Lanka"));
    assert!(state.view().loading);
}

#[test]
fn refresh_tick_targets_term_current_at_fire_time() {
    init_logging();
    let (state, _) = start(ControllerSettings::default());
    let (state, _) = update(state, Msg::InputChanged("economy".to_string()));

    let (_state, effects) = update(state, Msg::RefreshTick);

    assert_eq!(
        effects,
        vec![Effect::IssueFetch {
            ticket: FetchTicket {
                seq: 2,
                query: Query::new("economy"),
            }
        }]
    );
}

#[test]
fn blank_term_is_suppressed_by_default() {
    init_logging();
    let (state, _) = start(ControllerSettings::default());
    let (state, _) = update(state, Msg::InputChanged("   ".to_string()));
    let before = state.result().clone();

    let (state, effects) = update(state, Msg::SearchSubmitted);
    assert!(effects.is_empty());
    assert_eq!(state.result(), &before);

    let (_state, effects) = update(state, Msg::RefreshTick);
    assert!(effects.is_empty());
}

#[test]
fn blank_default_term_starts_idle_instead_of_loading() {
    init_logging();
    let settings = ControllerSettings {
        default_term: "  ".to_string(),
        ..ControllerSettings::default()
    };

    let (state, effects) = start(settings);

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.status, ViewStatus::Idle);
    assert!(!view.loading);

    let (state, _) = update(state, Msg::InputChanged("cricket".to_string()));
    let (state, effects) = update(state, Msg::SearchSubmitted);
    assert_eq!(issued_ticket(&effects).query, Query::new("cricket"));
    assert!(state.is_timer_armed());
}

#[test]
fn blank_term_falls_back_to_default_when_configured() {
    init_logging();
    let settings = ControllerSettings {
        empty_term_policy: EmptyTermPolicy::FallbackToDefault,
        refresh_period: Duration::from_secs(60),
        ..ControllerSettings::default()
    };
    let (state, _) = start(settings);
    let (state, _) = update(state, Msg::InputChanged(String::new()));

    let (state, effects) = update(state, Msg::SearchSubmitted);

    assert_eq!(issued_ticket(&effects).query, Query::new("Sri Lanka"));
    assert!(effects.contains(&Effect::ArmTimer {
        period: Duration::from_secs(60)
    }));
    assert_eq!(state.query().term(), "Sri Lanka");
}

#[test]
fn success_caps_articles_and_keeps_order() {
    init_logging();
    let (state, effects) = start(ControllerSettings::default());
    let ticket = issued_ticket(&effects);
    let articles: Vec<_> = (0..15).map(article).collect();

    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            ticket,
            outcome: FetchOutcome::Articles(articles.clone()),
        },
    );

    match state.view().status {
        ViewStatus::Success { articles: shown } => {
            assert_eq!(shown, articles[..10].to_vec());
        }
        other => panic!("expected success, got {other:?}"),
    }
    assert!(!state.view().loading);
}

#[test]
fn empty_outcome_reports_query() {
    init_logging();
    let (state, effects) = start(ControllerSettings::default());
    let ticket = issued_ticket(&effects);

    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            ticket,
            outcome: FetchOutcome::Empty,
        },
    );

    assert_eq!(
        state.view().status,
        ViewStatus::Empty {
            term: "Sri Lanka".to_string()
        }
    );
}

#[test]
fn failure_replaces_previous_success() {
    init_logging();
    let (state, effects) = start(ControllerSettings::default());
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            ticket: issued_ticket(&effects),
            outcome: FetchOutcome::Articles(vec![article(1)]),
        },
    );
    let (state, effects) = update(state, Msg::RefreshTick);
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            ticket: issued_ticket(&effects),
            outcome: FetchOutcome::Failed(FetchFailure::new(
                ErrorKind::NonJsonResponse,
                "Expected JSON but got: <html>...",
            )),
        },
    );

    assert_eq!(
        state.view().status,
        ViewStatus::Error {
            kind: ErrorKind::NonJsonResponse,
            message: "Expected JSON but got: <html>...".to_string(),
            display_message: "Server returned invalid response".to_string(),
            retryable: true,
        }
    );
}

#[test]
fn missing_credential_is_not_retryable() {
    init_logging();
    let (state, effects) = start(ControllerSettings::default());
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            ticket: issued_ticket(&effects),
            outcome: FetchOutcome::Failed(FetchFailure::new(
                ErrorKind::MissingCredential,
                "API key is missing",
            )),
        },
    );

    match state.view().status {
        ViewStatus::Error {
            kind, retryable, ..
        } => {
            assert_eq!(kind, ErrorKind::MissingCredential);
            assert!(!retryable);
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn resubmitting_same_term_is_idempotent() {
    init_logging();
    let (state, effects) = start(ControllerSettings::default());
    let articles: Vec<_> = (0..3).map(article).collect();
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            ticket: issued_ticket(&effects),
            outcome: FetchOutcome::Articles(articles.clone()),
        },
    );
    let first = state.result().clone();

    let (state, effects) = update(state, Msg::SearchSubmitted);
    let ticket = issued_ticket(&effects);
    assert_eq!(ticket.seq, 2);
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            ticket,
            outcome: FetchOutcome::Articles(articles),
        },
    );

    assert_eq!(state.result(), &first);
}

#[test]
fn teardown_cancels_timer_and_ignores_later_messages() {
    init_logging();
    let (state, _) = start(ControllerSettings::default());

    let (state, effects) = update(state, Msg::Teardown);
    assert_eq!(effects, vec![Effect::CancelTimer]);
    assert!(!state.is_timer_armed());

    let (_state, effects) = update(state, Msg::RefreshTick);
    assert!(effects.is_empty());
}
