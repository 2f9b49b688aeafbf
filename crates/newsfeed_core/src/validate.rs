use serde::Deserialize;
use serde_json::Value;

use crate::{Article, ErrorKind, FetchFailure, MAX_ARTICLES};

/// Characters of a non-JSON body kept as diagnostic context.
pub const BODY_EXCERPT_CHARS: usize = 100;

/// Raw HTTP response as handed over by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    /// Body bytes exactly as received.
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn json(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: body.into(),
        }
    }
}

/// Classified result of one completed fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// At least one article, capped at [`MAX_ARTICLES`], in source order.
    Articles(Vec<Article>),
    Empty,
    Failed(FetchFailure),
}

impl From<FetchFailure> for FetchOutcome {
    fn from(failure: FetchFailure) -> Self {
        FetchOutcome::Failed(failure)
    }
}

#[derive(Debug, Deserialize)]
struct WireArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
}

impl From<WireArticle> for Article {
    fn from(wire: WireArticle) -> Self {
        Article::new(
            wire.title.unwrap_or_default(),
            wire.description,
            wire.url.unwrap_or_default(),
            wire.url_to_image,
        )
    }
}

/// Classify a raw response: content type -> JSON parse -> HTTP status -> shape.
///
/// Every input maps to an outcome; this never panics and never yields a
/// partially converted list.
pub fn validate_response(response: &RawResponse) -> FetchOutcome {
    match classify(response) {
        Ok(articles) if articles.is_empty() => FetchOutcome::Empty,
        Ok(articles) => FetchOutcome::Articles(articles),
        Err(failure) => FetchOutcome::Failed(failure),
    }
}

fn classify(response: &RawResponse) -> Result<Vec<Article>, FetchFailure> {
    let is_json = response
        .content_type
        .as_deref()
        .is_some_and(is_json_media_type);
    if !is_json {
        return Err(FetchFailure::new(
            ErrorKind::NonJsonResponse,
            format!("Expected JSON but got: {}...", excerpt(&response.body)),
        ));
    }

    let json: Value = serde_json::from_slice(&response.body).map_err(|err| {
        FetchFailure::new(
            ErrorKind::MalformedJson,
            format!("Response body is not valid JSON: {err}"),
        )
    })?;

    if !(200..300).contains(&response.status) {
        let message = json
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.trim().is_empty())
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| format!("Request failed with status {}", response.status));
        return Err(FetchFailure::new(
            ErrorKind::ApiError {
                status: response.status,
            },
            message,
        ));
    }

    let entries = json
        .get("articles")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            FetchFailure::new(
                ErrorKind::InvalidShape,
                "Invalid response format - articles array missing",
            )
        })?;

    entries
        .iter()
        .take(MAX_ARTICLES)
        .enumerate()
        .map(|(index, entry)| to_article(index, entry))
        .collect()
}

fn to_article(index: usize, entry: &Value) -> Result<Article, FetchFailure> {
    let invalid = |detail: String| {
        FetchFailure::new(
            ErrorKind::InvalidShape,
            format!("Invalid response format - article {index}: {detail}"),
        )
    };
    // Structs also deserialize from sequences; only objects are articles.
    if !entry.is_object() {
        return Err(invalid("not an object".to_string()));
    }
    WireArticle::deserialize(entry)
        .map(Article::from)
        .map_err(|err| invalid(err.to_string()))
}

fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.contains('/') && essence.ends_with("+json"))
}

fn excerpt(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(BODY_EXCERPT_CHARS)
        .collect()
}
