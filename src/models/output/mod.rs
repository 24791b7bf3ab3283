// Render output model

/// A finished workbook and the file name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    pub file_name: String,
    pub file_bytes: Vec<u8>,
}

impl RenderOutput {
    /// Suggested download name for a year's planner
    pub fn file_name_for(year: i32) -> String {
        format!("Calendar_{}.xlsx", year)
    }
}
