use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use newsfeed_core::Msg;

use super::app::LoopEvent;

pub const HELP: &str = "\
Commands:
  <text>          search for <text>
  :term <text>    set the search term without searching
  :search         search for the current term
  :cat <name>     show a category (sports, politics, entertainment, health, fitness)
  :retry          re-run the current search
  :help           show this help
  :quit           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msgs(Vec<Msg>),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Msgs(Vec::new());
    }
    let Some(command) = line.strip_prefix(':') else {
        return Command::Msgs(vec![
            Msg::InputChanged(line.to_string()),
            Msg::SearchSubmitted,
        ]);
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };
    match name {
        "q" | "quit" => Command::Quit,
        "h" | "help" => Command::Help,
        "retry" => Command::Msgs(vec![Msg::RetryClicked]),
        "search" => Command::Msgs(vec![Msg::SearchSubmitted]),
        "term" => Command::Msgs(vec![Msg::InputChanged(arg.to_string())]),
        "cat" | "category" if !arg.is_empty() => {
            Command::Msgs(vec![Msg::CategorySelected(arg.to_lowercase())])
        }
        _ => Command::Unknown(line.to_string()),
    }
}

/// Reads stdin on a background thread. End of input counts as `:quit`.
pub fn spawn_reader(tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            let command = parse_line(&line);
            let quit = command == Command::Quit;
            if tx.send(LoopEvent::Input(command)).is_err() || quit {
                return;
            }
        }
        let _ = tx.send(LoopEvent::Input(Command::Quit));
    });
}
