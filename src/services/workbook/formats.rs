use rust_xlsxwriter::{Format, FormatAlign};

/// Fixed sizing and print settings of the planner sheets.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStyle {
    pub title_font_size: f64,
    pub title_row_height: f64,
    pub day_row_height: f64,
    pub day_font_size: f64,
    pub day_column_width: f64,
    pub label_column_width: f64,
    pub weekend_color: u32,
    pub logo_scale: f64,
    /// Excel paper size code, 9 = A4
    pub paper_size: u8,
    pub fit_pages_wide: u16,
    pub fit_pages_tall: u16,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            title_font_size: 20.0,
            title_row_height: 36.0,
            day_row_height: 15.0,
            day_font_size: 9.0,
            day_column_width: 5.0,
            label_column_width: 25.0,
            weekend_color: 0xD3D3D3, // light gray
            logo_scale: 0.5,
            paper_size: 9,
            fit_pages_wide: 1,
            fit_pages_tall: 2,
        }
    }
}

/// Reusable cell formats
pub(super) struct SheetFormats {
    pub title: Format,
    pub month_header: Format,
    pub day: Format,
    pub label: Format,
    pub weekend_day: Format,
    pub weekend_label: Format,
}

impl SheetFormats {
    pub fn new(style: &SheetStyle) -> Self {
        let title = Format::new()
            .set_bold()
            .set_font_size(style.title_font_size)
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::VerticalCenter);

        let month_header = Format::new()
            .set_bold()
            .set_font_size(style.day_font_size)
            .set_align(FormatAlign::Center);

        let day = Format::new()
            .set_font_size(style.day_font_size)
            .set_align(FormatAlign::Center);

        let label = Format::new().set_font_size(style.day_font_size);

        let weekend_day = day.clone().set_background_color(style.weekend_color);
        let weekend_label = label.clone().set_background_color(style.weekend_color);

        Self {
            title,
            month_header,
            day,
            label,
            weekend_day,
            weekend_label,
        }
    }
}
