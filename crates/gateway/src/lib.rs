//! HTTP surface for the delivery pipeline.

pub mod server;
pub mod state;

pub use {server::build_app, state::AppState};
