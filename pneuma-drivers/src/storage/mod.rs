//! Persistent storage adapters

pub mod settings_store;

pub use settings_store::{SettingsStore, StoreError};
