//! Application layer - Use cases and orchestration

pub mod entry_store;
pub mod init;
pub mod manage_config;

pub use entry_store::{EntryStore, UpdateOutcome};
pub use manage_config::ConfigService;
