use crate::feed::ArticleFeedController;
use crate::profile::CompanyProfileController;
use crate::route::Page;
use crate::search::SearchController;
use crate::view_model::AppViewModel;

/// Controllers that only exist on the company page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompanyPage {
    pub(crate) profile: CompanyProfileController,
    pub(crate) feed: ArticleFeedController,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    page: Page,
    search: SearchController,
    company: Option<CompanyPage>,
    dirty: bool,
}

impl AppState {
    /// State of the home page.
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a freshly loaded `page`. Nothing is fetched until
    /// `Msg::PageLoaded`.
    pub fn for_page(page: Page) -> Self {
        let company = match &page {
            Page::Company(params) => Some(CompanyPage {
                profile: CompanyProfileController::new(params.company.clone()),
                feed: ArticleFeedController::new(params.clone()),
            }),
            Page::Home | Page::NotFound => None,
        };
        Self {
            page,
            search: SearchController::new(),
            company,
            dirty: false,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn search(&self) -> &SearchController {
        &self.search
    }

    pub fn profile(&self) -> Option<&CompanyProfileController> {
        self.company.as_ref().map(|company| &company.profile)
    }

    pub fn feed(&self) -> Option<&ArticleFeedController> {
        self.company.as_ref().map(|company| &company.feed)
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::project(self, self.dirty)
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn search_mut(&mut self) -> &mut SearchController {
        &mut self.search
    }

    pub(crate) fn company_mut(&mut self) -> Option<&mut CompanyPage> {
        self.company.as_mut()
    }
}
