use std::path::PathBuf;

use clap::Parser;

/// Render ICS calendar feeds into a printable year planner (.xlsx).
#[derive(Parser, Debug)]
#[command(name = "ics-year-planner", version, about)]
pub struct Cli {
    /// Year to render.
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..=9999))]
    pub year: i32,

    /// Calendar feed URL (http or https). Repeat for several feeds; earlier
    /// feeds win when two events fall on the same day.
    #[arg(short, long = "url", value_name = "URL", required_unless_present = "ics_files")]
    pub urls: Vec<String>,

    /// Local .ics file, read after the URLs. May be repeated.
    #[arg(long = "ics-file", value_name = "PATH")]
    pub ics_files: Vec<PathBuf>,

    /// Logo image URL placed at the top right of each sheet.
    #[arg(long, value_name = "URL", conflicts_with = "logo_file")]
    pub logo_url: Option<String>,

    /// Logo image file placed at the top right of each sheet.
    #[arg(long, value_name = "PATH")]
    pub logo_file: Option<PathBuf>,

    /// Settings file (time zone, name replacements). Defaults to the
    /// platform config directory.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory the workbook is written to.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
