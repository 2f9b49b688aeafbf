//! Where requests go.
//!
//! `Direct` talks to the news provider with an API key in the query string,
//! `Proxy` talks to a same-origin endpoint that keeps the key server-side.
//! Both return the same response contract, so everything past
//! [`Endpoint::request_url`] is mode-agnostic.

use newsfeed_core::{ErrorKind, FetchFailure};
use url::Url;

use crate::FetchSettings;

pub const NEWS_API_URL: &str = "https://newsapi.org/v2/everything";
pub const PROXY_URL: &str = "http://localhost:3000/api/news";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Direct { url: Url, api_key: Option<String> },
    Proxy { url: Url },
}

impl Endpoint {
    /// Direct mode against the public provider URL.
    pub fn direct(api_key: Option<String>) -> Self {
        Endpoint::Direct {
            url: constant_url(NEWS_API_URL),
            api_key,
        }
    }

    pub fn proxy(url: Url) -> Self {
        Endpoint::Proxy { url }
    }

    /// Build the request URL for `term`.
    ///
    /// Fails with `MissingCredential` in direct mode when no usable key is set.
    pub fn request_url(&self, term: &str) -> Result<Url, FetchFailure> {
        match self {
            Endpoint::Direct { url, api_key } => {
                let key = api_key
                    .as_deref()
                    .map(str::trim)
                    .filter(|key| !key.is_empty())
                    .ok_or_else(|| {
                        FetchFailure::new(
                            ErrorKind::MissingCredential,
                            "API key is missing for direct mode",
                        )
                    })?;
                let mut url = url.clone();
                url.query_pairs_mut()
                    .append_pair("q", term)
                    .append_pair("apiKey", key);
                Ok(url)
            }
            Endpoint::Proxy { url } => {
                let mut url = url.clone();
                url.query_pairs_mut().append_pair("q", term);
                Ok(url)
            }
        }
    }

    /// Log-safe description; never includes the key.
    pub fn describe(&self) -> String {
        match self {
            Endpoint::Direct { url, api_key } => format!(
                "direct {} (api key {})",
                url,
                if api_key.is_some() { "set" } else { "missing" }
            ),
            Endpoint::Proxy { url } => format!("proxy {url}"),
        }
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint::proxy(constant_url(PROXY_URL))
    }
}

#[derive(Debug, Clone, Default)]
pub struct EngineSettings {
    pub endpoint: Endpoint,
    pub fetch: FetchSettings,
}

fn constant_url(raw: &'static str) -> Url {
    Url::parse(raw).expect("built-in URL constant is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_url_carries_term_and_key() {
        let endpoint = Endpoint::direct(Some("secret".to_string()));
        let url = endpoint.request_url("Sri Lanka").unwrap();
        assert_eq!(
            url.as_str(),
            "https://newsapi.org/v2/everything?q=Sri+Lanka&apiKey=secret"
        );
    }

    #[test]
    fn direct_without_key_is_missing_credential() {
        for key in [None, Some("   ".to_string())] {
            let err = Endpoint::direct(key).request_url("sports").unwrap_err();
            assert_eq!(err.kind, ErrorKind::MissingCredential);
        }
    }

    #[test]
    fn proxy_url_only_carries_term() {
        let url = Endpoint::default().request_url("a&b").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/news?q=a%26b");
    }

    #[test]
    fn describe_never_leaks_key() {
        let endpoint = Endpoint::direct(Some("secret".to_string()));
        assert!(!endpoint.describe().contains("secret"));
    }
}
