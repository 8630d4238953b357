use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::highlight::{escape_html, highlight};
use crate::reconcile::Placement;
use crate::records::Article;

pub const UNREACHABLE_MESSAGE: &str = "Cannot connect to server. Try again later";

/// Content of one card in the search results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultCard {
    /// A company name with the query highlighted.
    Match { name: String, markup: String },
    /// Shimmering placeholder while a search is in flight.
    Loading,
    NoResults { query: String },
    /// The search request failed.
    Unreachable,
}

impl ResultCard {
    pub fn matched(name: impl Into<String>, query: &str) -> Self {
        let name = name.into();
        let markup = highlight(&name, query);
        ResultCard::Match { name, markup }
    }

    pub fn markup(&self) -> String {
        match self {
            ResultCard::Match { markup, .. } => markup.clone(),
            ResultCard::Loading => String::new(),
            ResultCard::NoResults { query } => {
                format!("No results for `{}` in database", escape_html(query))
            }
            ResultCard::Unreachable => UNREACHABLE_MESSAGE.to_string(),
        }
    }

    /// Company a click on this card navigates to. Only real matches are
    /// interactive.
    pub fn click_target(&self) -> Option<&str> {
        match self {
            ResultCard::Match { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn classes(&self, placement: Placement) -> Vec<&'static str> {
        let mut classes = vec!["result"];
        match self {
            ResultCard::Match { .. } => {}
            ResultCard::Loading => classes.push("loading"),
            ResultCard::NoResults { .. } => classes.push("no-results"),
            ResultCard::Unreachable => classes.push("error"),
        }
        if placement.first {
            classes.push("top-result");
        }
        if placement.last {
            classes.push("bottom-result");
        }
        classes
    }
}

/// Display slots of one article card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub source: String,
    pub date: String,
    pub categories: String,
    pub description: String,
    pub headline: String,
    pub url: String,
}

impl ArticleCard {
    pub fn classes(&self, placement: Placement) -> Vec<&'static str> {
        let mut classes = vec!["article"];
        if placement.first {
            classes.push("top-article");
        }
        if placement.last {
            classes.push("bottom-article");
        }
        classes
    }
}

impl From<&Article> for ArticleCard {
    fn from(article: &Article) -> Self {
        Self {
            source: article.source.clone(),
            date: format_published_date(&article.date_published),
            categories: article.categories.join(", "),
            description: article.description.clone().unwrap_or_default(),
            headline: article.headline.clone(),
            url: article.url.clone(),
        }
    }
}

/// Renders a wire date as `Month D, YYYY`. Unparseable input is returned
/// verbatim.
pub fn format_published_date(raw: &str) -> String {
    match parse_calendar_date(raw.trim()) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(stamp.date());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // Flask serialises datetimes as RFC 1123 ("Tue, 03 Jun 2025 12:00:00 GMT").
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|stamp| stamp.date_naive())
}
