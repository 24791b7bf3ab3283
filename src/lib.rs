// ICS Year Planner Library
// Exports all modules for testing and reuse

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{ConfigError, ImportError, RenderError};
pub use models::event::{Calendar, Event};
pub use models::output::RenderOutput;
pub use models::replacement::{ReplacementRule, ReplacementTable};
pub use models::settings::{RendererConfig, Settings};
pub use services::workbook::GridRenderer;
