//! Error types shared by the importer, the settings layer and the renderer.

use thiserror::Error;

/// Problems with process configuration. Raised once, before any rendering.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown time zone identifier '{0}'")]
    UnknownTimeZone(String),

    #[error("replacement rule #{index} has an empty find string")]
    EmptyFind { index: usize },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Feed content that cannot be turned into events.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid DTSTART value '{value}' in event '{summary}'")]
    InvalidStart { value: String, summary: String },

    #[error("feed does not contain a VCALENDAR or VEVENT block")]
    NotIcs,
}

/// A render call either produces a whole workbook or fails with one of these.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("year {0} cannot be laid out on a calendar grid")]
    InvalidYear(i32),

    #[error("month range {start}..={end} is not within one year")]
    InvalidMonthRange { start: u32, end: u32 },

    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}
