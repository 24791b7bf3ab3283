//! Year planner workbook: sheet plans and XLSX assembly.

mod formats;
mod plan;
mod service;

pub use formats::SheetStyle;
pub use plan::{sheet_name, sheet_title, DayCell, SheetPlan};
pub use service::GridRenderer;
