//! Settings file loading.

mod service;

pub use service::SettingsService;
