use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One article as returned by `GET /articles/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub headline: String,
    pub url: String,
    pub source: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date_published: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Company record as returned by `GET /company/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub industries: Option<Vec<String>>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Ethics category an article can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Labor,
    Environment,
    Privacy,
    Governance,
    Diversity,
    HumanRights,
    ConsumerSafety,
    AnimalWelfare,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Labor,
        Category::Environment,
        Category::Privacy,
        Category::Governance,
        Category::Diversity,
        Category::HumanRights,
        Category::ConsumerSafety,
        Category::AnimalWelfare,
    ];

    /// Wire name used by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Labor => "labor",
            Category::Environment => "environment",
            Category::Privacy => "privacy",
            Category::Governance => "governance",
            Category::Diversity => "diversity",
            Category::HumanRights => "human rights",
            Category::ConsumerSafety => "consumer safety",
            Category::AnimalWelfare => "animal welfare",
        }
    }

    /// Parses an optional category parameter. `null`, `none` and the empty
    /// string mean "all categories".
    pub fn parse_param(raw: &str) -> Result<Option<Category>, UnknownCategory> {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
        {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['_', '-'], " ");
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Inputs of one article-listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedParams {
    pub company: String,
    /// 1-based page number.
    pub page: u32,
    pub category: Option<Category>,
}

impl FeedParams {
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            page: 1,
            category: None,
        }
    }

    /// Query pairs for `GET /articles/`. An absent category is omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("company", self.company.clone()),
            ("page", self.page.to_string()),
        ];
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        pairs
    }
}

/// Why a backend call produced no usable data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("not found")]
    NotFound,
    #[error("request failed with status {status}")]
    RequestFailed { status: u16 },
    #[error("network or parse failure: {message}")]
    NetworkOrParse { message: String },
}

/// How a controller surfaces a failed fetch to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureVisibility {
    /// Replace the list with a single error card.
    Card,
    /// Log the failure and keep whatever is on screen.
    LogOnly,
}
