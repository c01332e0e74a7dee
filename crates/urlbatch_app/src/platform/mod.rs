//! Terminal front end: wires the core state machine to the engine and the user.
mod app;
mod effects;
mod logging;
mod persistence;
mod prompt;
mod render;

pub use app::run_app;
