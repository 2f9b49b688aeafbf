//! Command-line configuration.
//!
//! Every option has a flag; the API key can also come from `NEWS_API_KEY`.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use newsfeed_core::{ControllerSettings, EmptyTermPolicy, DEFAULT_TERM};
use newsfeed_engine::{Endpoint, EngineSettings, FetchSettings, NEWS_API_URL, PROXY_URL};
use url::Url;

use crate::terminal::LogDestination;

const MAX_REFRESH_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Call the news provider directly with an API key.
    Direct,
    /// Call a same-origin proxy that holds the key.
    Proxy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BlankTerm {
    /// Ignore searches for a blank term.
    Suppress,
    /// Search for the default term instead.
    Default,
}

/// Terminal news reader with periodic refresh.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// How to reach the news API
    #[arg(long, value_enum, default_value_t = Mode::Proxy)]
    pub mode: Mode,

    /// Proxy endpoint (proxy mode)
    #[arg(long, default_value = PROXY_URL)]
    pub proxy_url: Url,

    /// Provider endpoint (direct mode)
    #[arg(long, default_value = NEWS_API_URL)]
    pub api_url: Url,

    /// News API key (direct mode)
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Term searched on start-up
    #[arg(short, long, default_value = DEFAULT_TERM, value_parser = non_blank)]
    pub term: String,

    /// Seconds between automatic refreshes (at most one day)
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u64).range(1..=MAX_REFRESH_SECS))]
    pub refresh_secs: u64,

    /// What a blank search does
    #[arg(long, value_enum, default_value_t = BlankTerm::Suppress)]
    pub blank_term: BlankTerm,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
}

impl Cli {
    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            default_term: self.term.clone(),
            refresh_period: Duration::from_secs(self.refresh_secs),
            empty_term_policy: match self.blank_term {
                BlankTerm::Suppress => EmptyTermPolicy::Suppress,
                BlankTerm::Default => EmptyTermPolicy::FallbackToDefault,
            },
        }
    }

    pub fn engine_settings(&self) -> EngineSettings {
        let endpoint = match self.mode {
            Mode::Direct => Endpoint::Direct {
                url: self.api_url.clone(),
                api_key: self.api_key.clone(),
            },
            Mode::Proxy => Endpoint::proxy(self.proxy_url.clone()),
        };
        EngineSettings {
            endpoint,
            fetch: FetchSettings {
                request_timeout: Duration::from_secs(self.timeout_secs),
                ..FetchSettings::default()
            },
        }
    }
}

fn non_blank(raw: &str) -> Result<String, String> {
    let term = raw.trim();
    if term.is_empty() {
        Err("the start-up term must not be blank".to_string())
    } else {
        Ok(term.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_proxy_and_five_minute_refresh() {
        let cli = Cli::parse_from(["newsfeed"]);

        let controller = cli.controller_settings();
        assert_eq!(controller, ControllerSettings::default());
        assert_eq!(
            cli.engine_settings().endpoint,
            Endpoint::proxy(Url::parse(PROXY_URL).unwrap())
        );
    }

    #[test]
    fn direct_mode_carries_key_and_url() {
        let cli = Cli::parse_from([
            "newsfeed",
            "--mode",
            "direct",
            "--api-key",
            "abc",
            "--api-url",
            "https://news.example.com/v2/everything",
        ]);

        assert_eq!(
            cli.engine_settings().endpoint,
            Endpoint::Direct {
                url: Url::parse("https://news.example.com/v2/everything").unwrap(),
                api_key: Some("abc".to_string()),
            }
        );
    }

    #[test]
    fn blank_term_policy_and_interval_are_configurable() {
        let cli = Cli::parse_from([
            "newsfeed",
            "--blank-term",
            "default",
            "--refresh-secs",
            "60",
            "-t",
            "sports",
        ]);

        let settings = cli.controller_settings();
        assert_eq!(settings.empty_term_policy, EmptyTermPolicy::FallbackToDefault);
        assert_eq!(settings.refresh_period, Duration::from_secs(60));
        assert_eq!(settings.default_term, "sports");
    }

    #[test]
    fn refresh_interval_outside_one_second_to_one_day_is_rejected() {
        assert!(Cli::try_parse_from(["newsfeed", "--refresh-secs", "0"]).is_err());
        assert!(Cli::try_parse_from(["newsfeed", "--refresh-secs", "86401"]).is_err());
        assert!(Cli::try_parse_from(["newsfeed", "--refresh-secs", "18446744073709551615"]).is_err());

        let cli = Cli::parse_from(["newsfeed", "--refresh-secs", "86400"]);
        assert_eq!(cli.controller_settings().refresh_period, Duration::from_secs(86_400));
    }

    #[test]
    fn blank_start_up_term_is_rejected() {
        assert!(Cli::try_parse_from(["newsfeed", "-t", ""]).is_err());
        assert!(Cli::try_parse_from(["newsfeed", "--term", "   "]).is_err());

        let cli = Cli::parse_from(["newsfeed", "-t", " cricket "]);
        assert_eq!(cli.controller_settings().default_term, "cricket");
    }
}
