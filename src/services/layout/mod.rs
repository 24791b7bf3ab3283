//! Grid coordinates for the half-year worksheets.
//!
//! Each month is a block of two columns: day numbers on the left, labels on
//! the right. Blocks sit side by side starting at column 0, their header in
//! `HEADER_ROW` and one row per day below it. Row 0 is left for the title.
//! Coordinates are zero-based, as the workbook writer expects.

use std::ops::RangeInclusive;

use chrono::NaiveDate;

use crate::error::RenderError;
use crate::utils::date::{days_in_month, is_weekend};

pub const TITLE_ROW: u32 = 0;
pub const HEADER_ROW: u32 = 1;
pub const COLUMNS_PER_MONTH: u16 = 2;

/// One of the two worksheets of a planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HalfYear {
    First,
    Second,
}

impl HalfYear {
    pub const ALL: [HalfYear; 2] = [HalfYear::First, HalfYear::Second];

    pub fn months(self) -> RangeInclusive<u32> {
        match self {
            HalfYear::First => 1..=6,
            HalfYear::Second => 7..=12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HalfYear::First => "H1",
            HalfYear::Second => "H2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRow {
    pub date: NaiveDate,
    pub row: u32,
    pub day_number: u32,
    pub is_weekend: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBlock {
    pub first_day: NaiveDate,
    pub header_row: u32,
    pub day_column: u16,
    pub label_column: u16,
    pub days: Vec<DayRow>,
}

impl MonthBlock {
    pub fn last_row(&self) -> u32 {
        self.header_row + self.days.len() as u32
    }
}

/// Inclusive cell rectangle, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

impl CellRange {
    /// Absolute A1-style reference, e.g. `$A$1:$L$33`.
    pub fn to_absolute_a1(&self) -> String {
        format!(
            "${}${}:${}${}",
            column_letters(self.first_col),
            self.first_row + 1,
            column_letters(self.last_col),
            self.last_row + 1
        )
    }
}

pub fn column_letters(col: u16) -> String {
    let mut n = u32::from(col) + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Lay out months `start_month..=end_month` of `year` left to right.
pub fn layout_months(year: i32, start_month: u32, end_month: u32) -> Result<Vec<MonthBlock>, RenderError> {
    if !(1..=12).contains(&start_month) || !(start_month..=12).contains(&end_month) {
        return Err(RenderError::InvalidMonthRange {
            start: start_month,
            end: end_month,
        });
    }

    let mut blocks = Vec::with_capacity((end_month - start_month + 1) as usize);
    let mut day_column: u16 = 0;

    for month in start_month..=end_month {
        let first_day =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(RenderError::InvalidYear(year))?;
        let day_count = days_in_month(year, month).ok_or(RenderError::InvalidYear(year))?;

        let mut days = Vec::with_capacity(day_count as usize);
        for day_number in 1..=day_count {
            let date = NaiveDate::from_ymd_opt(year, month, day_number)
                .ok_or(RenderError::InvalidYear(year))?;
            days.push(DayRow {
                date,
                row: HEADER_ROW + day_number,
                day_number,
                is_weekend: is_weekend(date),
            });
        }

        blocks.push(MonthBlock {
            first_day,
            header_row: HEADER_ROW,
            day_column,
            label_column: day_column + 1,
            days,
        });

        day_column += COLUMNS_PER_MONTH;
    }

    Ok(blocks)
}

pub fn layout_half_year(year: i32, half: HalfYear) -> Result<Vec<MonthBlock>, RenderError> {
    let months = half.months();
    layout_months(year, *months.start(), *months.end())
}

/// Rectangle covering the title row and every month block.
pub fn used_range(blocks: &[MonthBlock]) -> Option<CellRange> {
    let last_row = blocks.iter().map(MonthBlock::last_row).max()?;
    let last_col = blocks.iter().map(|block| block.label_column).max()?;

    Some(CellRange {
        first_row: TITLE_ROW,
        first_col: 0,
        last_row,
        last_col,
    })
}
