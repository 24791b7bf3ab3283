// Module exports for models

pub mod event;
pub mod output;
pub mod replacement;
pub mod settings;
