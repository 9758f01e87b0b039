use clap::Parser;
use std::process;
use studentfiles::{
    OutputFormatter, OutputMode, ReportCli, ReportGenerator, StudentFilesError, UserFriendlyError,
};

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = ReportCli::parse();
    let formatter = OutputFormatter::new(cli.output_format.mode(), cli.verbosity_level(), cli.quiet);

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            formatter.print_user_friendly_error(&e);
            return 2;
        }
    };

    let generator = ReportGenerator::new(&config.report);

    match generator.run() {
        Ok(summary) => {
            formatter.success(&format!(
                "Report written to '{}' ({} students).",
                summary.output.display(),
                summary.rows_written
            ));
            0
        }
        Err(e) => {
            formatter.print_user_friendly_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &StudentFilesError) -> i32 {
    match error {
        StudentFilesError::Config { .. } => 2,
        StudentFilesError::InputNotFound { .. } => 3,
        StudentFilesError::InvalidJson { .. } => 4,
        StudentFilesError::NotAnArray { .. } => 5,
        StudentFilesError::CsvWrite { .. } => 6,
        _ => 1,
    }
}
