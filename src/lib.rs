//! Diagnose Relay - A small HTTP relay for diagnostic reports
//!
//! Stores percent-encoded JSON reports under short shareable keys
//! (`P???V???Z`) for 24 hours and serves them back by key.

pub mod api;
pub mod config;
pub mod error;
pub mod keygen;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
