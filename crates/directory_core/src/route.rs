use directory_logging::directory_warn;
use url::Url;

use crate::records::{Category, FeedParams};

/// Navigation target inside the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Company { name: String },
    NotFound,
}

impl Route {
    /// Absolute URL of this route under `origin`.
    pub fn resolve(&self, origin: &Url) -> Result<Url, url::ParseError> {
        match self {
            Route::Home => origin.join("/frontend/"),
            Route::NotFound => origin.join("/frontend/404.html"),
            Route::Company { name } => {
                let mut url = origin.join("/frontend/company/")?;
                url.query_pairs_mut().append_pair("company", name);
                Ok(url)
            }
        }
    }
}

/// The page a URL lands on, with the state its query string carries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Company(FeedParams),
    NotFound,
}

impl Page {
    pub fn from_url(url: &Url) -> Page {
        let path = url.path();
        if path.ends_with("404.html") {
            return Page::NotFound;
        }
        if !path.trim_end_matches('/').ends_with("/company") {
            return Page::Home;
        }

        let mut company = None;
        let mut page = 1;
        let mut category = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "company" => company = Some(value.into_owned()),
                "page" => match value.trim().parse::<u32>() {
                    Ok(parsed) => page = parsed.max(1),
                    Err(_) => directory_warn!(
                        "Ignoring invalid page parameter `{}`",
                        value
                    ),
                },
                "category" => match Category::parse_param(&value) {
                    Ok(parsed) => category = parsed,
                    Err(err) => directory_warn!("Ignoring {}", err),
                },
                _ => {}
            }
        }

        match company {
            Some(company) if !company.trim().is_empty() => Page::Company(FeedParams {
                company,
                page,
                category,
            }),
            _ => Page::NotFound,
        }
    }
}
