//! Workbook assembly: two half-year worksheets serialised to XLSX bytes.

use rust_xlsxwriter::{Image, Workbook, Worksheet};

use crate::error::RenderError;
use crate::models::event::Calendar;
use crate::models::output::RenderOutput;
use crate::models::settings::RendererConfig;
use crate::services::labels::LabelIndex;
use crate::services::layout::{HalfYear, HEADER_ROW, TITLE_ROW};
use crate::utils::date::month_name;

use super::formats::{SheetFormats, SheetStyle};
use super::plan::SheetPlan;

/// Renders calendars into a year planner workbook.
///
/// Holds only configuration; every `render` call builds and owns its own
/// workbook.
pub struct GridRenderer {
    config: RendererConfig,
    style: SheetStyle,
}

impl GridRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            style: SheetStyle::default(),
        }
    }

    pub fn with_style(mut self, style: SheetStyle) -> Self {
        self.style = style;
        self
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Resolve labels and lay out both halves without touching a workbook.
    pub fn plan(&self, year: i32, calendars: &[Calendar]) -> Result<Vec<SheetPlan>, RenderError> {
        if year < 1 {
            return Err(RenderError::InvalidYear(year));
        }

        let labels = LabelIndex::build(year, calendars, &self.config);
        if labels.dropped_collisions() > 0 {
            log::info!(
                "{} same-day events were hidden behind an earlier event on the same date",
                labels.dropped_collisions()
            );
        }

        HalfYear::ALL
            .iter()
            .map(|half| SheetPlan::build(year, *half, &labels))
            .collect()
    }

    /// Render `year` to XLSX. `logo` is embedded on both sheets when it
    /// decodes as an image; otherwise it is skipped with a warning.
    pub fn render(
        &self,
        year: i32,
        calendars: &[Calendar],
        logo: Option<&[u8]>,
    ) -> Result<RenderOutput, RenderError> {
        log::info!(
            "Rendering {} planner from {} calendars ({} events)",
            year,
            calendars.len(),
            calendars.iter().map(Calendar::len).sum::<usize>()
        );

        let plans = self.plan(year, calendars)?;
        let logo = logo.and_then(|bytes| self.decode_logo(bytes));
        let formats = SheetFormats::new(&self.style);

        let mut workbook = Workbook::new();
        for plan in &plans {
            let worksheet = self.build_worksheet(plan, &formats, logo.as_ref())?;
            workbook.push_worksheet(worksheet);

            let name = format!("Calendar_{}", plan.half.label());
            let refers_to = format!("='{}'!{}", plan.name, plan.print_area.to_absolute_a1());
            workbook.define_name(name.as_str(), refers_to.as_str())?;
        }

        let file_bytes = workbook.save_to_buffer()?;
        log::debug!("Serialised {} planner: {} bytes", year, file_bytes.len());

        Ok(RenderOutput {
            file_name: RenderOutput::file_name_for(year),
            file_bytes,
        })
    }

    fn decode_logo(&self, bytes: &[u8]) -> Option<Image> {
        match Image::new_from_buffer(bytes) {
            Ok(image) => Some(
                image
                    .set_scale_width(self.style.logo_scale)
                    .set_scale_height(self.style.logo_scale),
            ),
            Err(err) => {
                log::warn!("Logo is not a supported image, rendering without it: {}", err);
                None
            }
        }
    }

    fn build_worksheet(
        &self,
        plan: &SheetPlan,
        formats: &SheetFormats,
        logo: Option<&Image>,
    ) -> Result<Worksheet, RenderError> {
        let style = &self.style;
        let area = plan.print_area;

        let mut worksheet = Worksheet::new();
        worksheet.set_name(plan.name.as_str())?;

        // Title
        worksheet.merge_range(
            TITLE_ROW,
            area.first_col,
            TITLE_ROW,
            area.last_col,
            plan.title.as_str(),
            &formats.title,
        )?;
        worksheet.set_row_height(TITLE_ROW, style.title_row_height)?;

        if let Some(image) = logo {
            let logo_col = area.last_col.saturating_sub(1);
            worksheet.insert_image_with_offset(TITLE_ROW, logo_col, image, 4, 2)?;
        }

        for row in HEADER_ROW..=area.last_row {
            worksheet.set_row_height(row, style.day_row_height)?;
        }

        // Month headers and column sizing
        for block in &plan.blocks {
            let month = month_name(block.first_day);
            worksheet.merge_range(
                block.header_row,
                block.day_column,
                block.header_row,
                block.label_column,
                month.as_str(),
                &formats.month_header,
            )?;
            worksheet.set_column_width(block.day_column, style.day_column_width)?;
            worksheet.set_column_width(block.label_column, style.label_column_width)?;
        }

        // Day rows
        for cell in &plan.cells {
            let (day_format, label_format) = if cell.is_weekend {
                (&formats.weekend_day, &formats.weekend_label)
            } else {
                (&formats.day, &formats.label)
            };

            worksheet.write_number_with_format(cell.row, cell.column, cell.day_number, day_format)?;
            worksheet.write_string_with_format(
                cell.row,
                cell.label_column(),
                cell.label.as_str(),
                label_format,
            )?;
        }

        // Print setup
        worksheet.set_print_area(area.first_row, area.first_col, area.last_row, area.last_col)?;
        worksheet.set_paper_size(style.paper_size);
        worksheet.set_landscape();
        worksheet.set_print_fit_to_pages(style.fit_pages_wide, style.fit_pages_tall);

        Ok(worksheet)
    }
}
