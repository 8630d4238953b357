mod app;
mod effects;
mod input;
mod ui;

pub use app::run_app;
