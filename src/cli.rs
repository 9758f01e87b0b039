use crate::config::{CliOverrides, Config};
use crate::error::Result;
use crate::ui::OutputMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "studentfiles")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage dated student records files in a working folder")]
#[command(
    long_about = "studentfiles prepares a working folder, writes a date-stamped records \
                  file from entered student names, shows its contents and metadata, \
                  archives a backup copy, and offers interactive deletion. Every action \
                  is appended to an activity log inside the folder."
)]
#[command(after_help = "EXAMPLES:\n  \
    studentfiles\n  \
    studentfiles --dir ClassFiles --count 3\n  \
    studentfiles --name Alice --name Bob --skip-delete\n  \
    studentfiles --config studentfiles.toml --output-format plain")]
pub struct Cli {
    /// Working folder for records, log, and archive
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Pre-supply a student name (repeatable); remaining names are prompted
    #[arg(short, long = "name", value_name = "NAME")]
    pub names: Vec<String>,

    /// Number of student names to collect
    #[arg(long)]
    pub count: Option<usize>,

    /// Answer the deletion prompt with "no"
    #[arg(long)]
    pub skip_delete: bool,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate a sample configuration file
    #[arg(long)]
    pub generate_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// Plain text output
    Plain,
}

impl OutputFormat {
    pub fn mode(self) -> OutputMode {
        match self {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_root_dir(self.dir.clone())
            .with_student_count(self.count)
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "studentreport")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a CSV score report from a JSON array of student records")]
#[command(
    long_about = "studentreport reads a JSON array of {id, name, scores} records, \
                  computes each student's average rounded to two decimal places, and \
                  writes a CSV sorted by average descending. A malformed input aborts \
                  the run without writing anything."
)]
#[command(after_help = "EXAMPLES:\n  \
    studentreport\n  \
    studentreport --input grades/students.json --output grades/report.csv")]
pub struct ReportCli {
    /// Input JSON file of student records
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output CSV path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl ReportCli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = CliOverrides::new()
            .with_report_input(self.input.clone())
            .with_report_output(self.output.clone());
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
