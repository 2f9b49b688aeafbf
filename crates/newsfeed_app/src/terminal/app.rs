use std::io::{self, Write};
use std::sync::mpsc;

use anyhow::Context;
use chrono::{DateTime, Local};
use newsfeed_core::{start, update, AppState, Msg};
use newsfeed_logging::{feed_info, feed_warn};

use super::effects::EffectRunner;
use super::input::{self, Command};
use super::{logging, render};
use crate::cli::Cli;

/// Everything the controller loop reacts to, from one channel.
#[derive(Debug)]
pub enum LoopEvent {
    Msg(Msg),
    Input(Command),
}

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(cli.log);

    let (tx, rx) = mpsc::channel::<LoopEvent>();
    let runner = EffectRunner::new(cli.engine_settings(), tx.clone())
        .context("starting the fetch engine")?;
    input::spawn_reader(tx);

    let mut out = io::stdout().lock();
    writeln!(out, "{}", input::HELP)?;

    let (mut state, effects) = start(cli.controller_settings());
    state.consume_dirty();
    let mut session = Session {
        state,
        runner,
        updated_at: None,
    };
    session.runner.enqueue(effects);
    session.render(&mut out)?;

    while let Ok(event) = rx.recv() {
        match event {
            LoopEvent::Msg(msg) => session.dispatch(msg, &mut out)?,
            LoopEvent::Input(Command::Msgs(msgs)) => {
                for msg in msgs {
                    session.dispatch(msg, &mut out)?;
                }
            }
            LoopEvent::Input(Command::Help) => writeln!(out, "{}", input::HELP)?,
            LoopEvent::Input(Command::Unknown(line)) => {
                writeln!(out, "Unknown command {line:?}; type :help for commands.")?;
            }
            LoopEvent::Input(Command::Quit) => break,
        }
    }

    session.dispatch(Msg::Teardown, &mut out)?;
    feed_info!("Session ended");
    Ok(())
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    updated_at: Option<DateTime<Local>>,
}

impl Session {
    fn dispatch(&mut self, msg: Msg, out: &mut impl Write) -> io::Result<()> {
        let completed = matches!(msg, Msg::FetchCompleted { .. });
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);

        if !was_dirty {
            return Ok(());
        }
        if completed {
            self.updated_at = Some(Local::now());
        }
        self.render(out)
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for line in render::render(&self.state.view(), self.updated_at) {
            writeln!(out, "{line}")?;
        }
        out.flush().inspect_err(|err| feed_warn!("Failed to flush output: {}", err))
    }
}
