use chrono::{DateTime, Local};
use newsfeed_core::{AppViewModel, Article, ViewStatus};

const RULE: &str = "------------------------------------------------------------";

/// Turns the view model into terminal lines. Read-only over the view.
pub fn render(view: &AppViewModel, updated_at: Option<DateTime<Local>>) -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        format!("Newsfeed | search: \"{}\"", view.term),
        format_categories(view),
        String::new(),
    ];

    match &view.status {
        ViewStatus::Idle => {
            lines.push("Type a search term to load news.".to_string());
        }
        ViewStatus::Loading { term } => {
            lines.push(format!("Loading news for \"{term}\"..."));
        }
        ViewStatus::Error {
            display_message,
            retryable,
            ..
        } => {
            lines.push(format!("Error: {display_message}"));
            if *retryable {
                lines.push("Type :retry to try again.".to_string());
            } else {
                lines.push("Check the API key configuration and restart.".to_string());
            }
        }
        ViewStatus::Empty { term } => {
            lines.push(format!(
                "No news found for \"{term}\". Try a different search term."
            ));
        }
        ViewStatus::Success { articles } => {
            let cards = card_slots(articles);
            if cards.is_empty() {
                lines.push("No articles with images to show.".to_string());
            }
            for (index, article) in cards.iter().enumerate() {
                lines.extend(format_card(index + 1, article));
            }
            lines.push(String::new());
            lines.push(format!(
                "Showing {} of {} articles | refresh every {}",
                cards.len(),
                articles.len(),
                format_period(view.refresh_period.as_secs())
            ));
        }
    }

    if let Some(updated_at) = updated_at {
        lines.push(format!("Updated {}", updated_at.format("%H:%M:%S")));
    }
    lines
}

/// Articles that get a card. Image-less articles are skipped here only.
fn card_slots(articles: &[Article]) -> Vec<&Article> {
    articles
        .iter()
        .filter(|article| article.is_renderable())
        .collect()
}

fn format_card(number: usize, article: &Article) -> Vec<String> {
    let mut card = vec![format!("{number:>2}. {}", article.title())];
    if let Some(description) = article.description().filter(|d| !d.trim().is_empty()) {
        card.push(format!("    {}", description.trim()));
    }
    card.push(format!("    Read more: {}", article.url()));
    card
}

fn format_categories(view: &AppViewModel) -> String {
    let names: Vec<String> = view
        .categories
        .iter()
        .map(|category| {
            if category.active {
                format!("[{}]", category.name)
            } else {
                category.name.to_string()
            }
        })
        .collect();
    let busy = if view.loading { " (busy)" } else { "" };
    format!("Categories: {}{busy}", names.join("  "))
}

fn format_period(secs: u64) -> String {
    if secs >= 60 && secs % 60 == 0 {
        format!("{} min", secs / 60)
    } else {
        format!("{secs} s")
    }
}
