use directory_logging::{directory_debug, directory_error, directory_info};

use crate::records::{CompanyProfile, FailureVisibility, FetchFailure};
use crate::route::Route;

/// Display slots of the company header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub description: String,
    pub logo: Option<String>,
    pub industries: Option<String>,
    pub website: Option<String>,
}

impl From<CompanyProfile> for ProfileView {
    fn from(profile: CompanyProfile) -> Self {
        Self {
            name: profile.name,
            description: profile.description.unwrap_or_default(),
            logo: profile.logo.filter(|logo| !logo.is_empty()),
            industries: profile
                .industries
                .filter(|industries| !industries.is_empty())
                .map(|industries| industries.join(", ")),
            website: profile.website.filter(|site| !site.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfilePhase {
    #[default]
    Loading,
    Loaded(ProfileView),
    /// Generic failure: logged only, the panel keeps its loading look.
    Failed,
}

/// One-shot fetch-and-populate of the company header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyProfileController {
    company: String,
    phase: ProfilePhase,
}

impl CompanyProfileController {
    pub const FAILURE_VISIBILITY: FailureVisibility = FailureVisibility::LogOnly;

    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            phase: ProfilePhase::Loading,
        }
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn phase(&self) -> &ProfilePhase {
        &self.phase
    }

    pub fn loading(&self) -> bool {
        !matches!(self.phase, ProfilePhase::Loaded(_))
    }

    /// Applies the lookup result. A 404 yields the not-found route.
    pub fn resolve(&mut self, result: Result<CompanyProfile, FetchFailure>) -> Option<Route> {
        if self.phase != ProfilePhase::Loading {
            directory_debug!("Ignoring repeated profile response for {}", self.company);
            return None;
        }

        match result {
            Ok(profile) => {
                directory_info!("Loaded profile for {}", profile.name);
                self.phase = ProfilePhase::Loaded(profile.into());
                None
            }
            Err(FetchFailure::NotFound) => {
                directory_info!("Company {} not found", self.company);
                Some(Route::NotFound)
            }
            Err(failure) => {
                directory_error!("Profile lookup for {} failed: {}", self.company, failure);
                self.phase = ProfilePhase::Failed;
                None
            }
        }
    }
}
