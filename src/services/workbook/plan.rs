use chrono::NaiveDate;

use crate::error::RenderError;
use crate::services::labels::LabelIndex;
use crate::services::layout::{layout_half_year, used_range, CellRange, HalfYear, MonthBlock};
use crate::utils::date::weekday_abbrev;

/// One day of the grid with its final text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub row: u32,
    /// Day-number column; the label sits one column to the right.
    pub column: u16,
    pub day_number: u32,
    pub is_weekend: bool,
    pub label: String,
}

impl DayCell {
    pub fn label_column(&self) -> u16 {
        self.column + 1
    }
}

/// Everything that goes onto one worksheet, before any spreadsheet calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPlan {
    pub half: HalfYear,
    pub name: String,
    pub title: String,
    pub blocks: Vec<MonthBlock>,
    pub cells: Vec<DayCell>,
    pub print_area: CellRange,
}

pub fn sheet_name(year: i32, half: HalfYear) -> String {
    format!("{} Calendar - {}", year, half.label())
}

pub fn sheet_title(year: i32, half: HalfYear) -> String {
    let months = match half {
        HalfYear::First => "January - June",
        HalfYear::Second => "July - December",
    };
    format!("{} {}", months, year)
}

impl SheetPlan {
    pub fn build(year: i32, half: HalfYear, labels: &LabelIndex) -> Result<Self, RenderError> {
        let blocks = layout_half_year(year, half)?;
        let print_area = used_range(&blocks).ok_or(RenderError::InvalidYear(year))?;

        let cells = blocks
            .iter()
            .flat_map(|block| {
                block.days.iter().map(move |day| DayCell {
                    date: day.date,
                    row: day.row,
                    column: block.day_column,
                    day_number: day.day_number,
                    is_weekend: day.is_weekend,
                    label: labels
                        .label_for(day.date)
                        .map(str::to_string)
                        .unwrap_or_else(|| weekday_abbrev(day.date)),
                })
            })
            .collect();

        Ok(Self {
            half,
            name: sheet_name(year, half),
            title: sheet_title(year, half),
            blocks,
            cells,
            print_area,
        })
    }

    pub fn cell_for(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }
}
