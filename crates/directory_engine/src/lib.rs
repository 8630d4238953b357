//! Directory engine: backend API client and request execution.
mod client;
mod engine;
mod types;

pub use client::{ClientSettings, DirectoryApi, ReqwestApi};
pub use engine::EngineHandle;
pub use types::{ApiError, EngineEvent};
