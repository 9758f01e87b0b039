pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod ui;
pub mod workspace;

// Public API re-exports
pub use cli::{Cli, OutputFormat, ReportCli};
pub use config::{CliOverrides, Config, ReportConfig, WorkspaceConfig};
pub use error::{Result, StudentFilesError, UserFriendlyError};

// Core functionality re-exports
pub use logging::ActivityLog;
pub use report::{ReportGenerator, ReportRow, ReportSummary};
pub use ui::{InterruptWatcher, OutputFormatter, OutputMode, Prompter, ScriptedPrompter, StdinPrompter};
pub use workspace::{Archiver, DeleteOutcome, Workspace, WorkspaceStatus};

use crate::ui::prompt;
use crate::workspace::{maintenance, records};
use std::path::{Path, PathBuf};

/// How to drive a run non-interactively: pre-supplied names skip their
/// prompts, and `skip_delete` answers the deletion question with "no".
#[derive(Debug, Default)]
pub struct RunOptions {
    pub preset_names: Vec<String>,
    pub skip_delete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    /// The records file could not be written; the remaining stages were
    /// skipped. Not a process failure.
    Aborted,
}

/// Main library interface for the file-management workflow: workspace
/// setup, records writing, inspection, archival, and interactive deletion,
/// with every step mirrored into the activity log.
pub struct FileManager {
    config: Config,
    workspace: Workspace,
    formatter: OutputFormatter,
    log: ActivityLog,
    interrupts: InterruptWatcher,
}

impl FileManager {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Result<Self> {
        config.validate()?;

        let workspace = Workspace::new(&config.workspace);
        let formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let log = ActivityLog::new(workspace.root(), workspace.log_filename());
        let interrupts = InterruptWatcher::install();

        Ok(Self {
            config,
            workspace,
            formatter,
            log,
            interrupts,
        })
    }

    /// Create a FileManager from CLI arguments.
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        Self::new(
            config,
            cli_args.output_format.mode(),
            cli_args.verbosity_level(),
            cli_args.quiet,
        )
    }

    /// Run the whole workflow. `Err` is returned only for the fatal case —
    /// the working folder could not be created; every later failure is
    /// printed, logged, and reflected in the returned status instead.
    pub fn run(&self, prompter: &mut dyn Prompter, options: &RunOptions) -> Result<RunStatus> {
        self.formatter.heading("Student records file manager");

        self.initialize_workspace()?;

        let names = self.collect_names(prompter, options);

        let records_path = match self.write_records_step(&names) {
            Some(path) => path,
            None => {
                self.formatter.error("Exiting due to file creation error.");
                return Ok(RunStatus::Aborted);
            }
        };

        self.inspect_step(&records_path);
        self.archive_step(&records_path);
        self.delete_step(prompter, options.skip_delete);

        self.formatter.blank_line();
        self.formatter.line(&format!(
            "Done. Check {} inside the {} folder for log entries.",
            self.workspace.log_filename(),
            self.workspace.root().display()
        ));

        Ok(RunStatus::Completed)
    }

    fn initialize_workspace(&self) -> Result<WorkspaceStatus> {
        match self.workspace.ensure() {
            Ok(WorkspaceStatus::Created) => {
                self.formatter.success(&format!(
                    "Created folder: {}",
                    self.workspace.display_root().display()
                ));
                Ok(WorkspaceStatus::Created)
            }
            Ok(WorkspaceStatus::AlreadyExisting) => {
                self.formatter.line(&format!(
                    "Folder already exists: {}",
                    self.workspace.display_root().display()
                ));
                Ok(WorkspaceStatus::AlreadyExisting)
            }
            Err(e) => {
                // The primary log sink lives inside the folder that just
                // failed, so this entry lands in the fallback location.
                self.log.error(&e.user_message());
                Err(e)
            }
        }
    }

    fn collect_names(&self, prompter: &mut dyn Prompter, options: &RunOptions) -> Vec<String> {
        let count = self.config.workspace.student_count;

        self.formatter.blank_line();
        self.formatter.line(&format!(
            "Please enter {} student names (press Enter to accept default).",
            count
        ));

        prompt::collect_student_names(
            prompter,
            &self.interrupts,
            &self.formatter,
            &options.preset_names,
            count,
        )
    }

    fn write_records_step(&self, names: &[String]) -> Option<PathBuf> {
        match records::write_records(&self.workspace, names) {
            Ok(path) => {
                let filename = file_name_of(&path);
                self.formatter.success(&format!(
                    "File written: {} at {}",
                    filename,
                    logging::timestamp()
                ));
                self.log.info(&format!("{} created successfully.", filename));
                Some(path)
            }
            Err(e) => {
                self.report_failure(&e);
                None
            }
        }
    }

    fn inspect_step(&self, path: &Path) {
        // Content and metadata are independent units, but an unreadable
        // file skips the metadata lookup entirely.
        let content = match records::read_contents(path) {
            Ok(content) => content,
            Err(e) => {
                self.report_failure(&e);
                return;
            }
        };

        self.formatter.blank_line();
        self.formatter.line("--- File contents ---");
        let trimmed = content.trim();
        if trimmed.is_empty() {
            self.formatter.line("(empty file)");
        } else {
            self.formatter.line(trimmed);
        }

        match records::read_metadata(path) {
            Ok(metadata) => {
                self.formatter.line(&format!("Size: {} bytes", metadata.size));
                self.formatter
                    .line(&format!("Last modified: {}", metadata.modified_display()));
            }
            Err(e) => self.report_failure(&e),
        }
    }

    fn archive_step(&self, records_path: &Path) {
        let archiver = Archiver::new();

        let backup_path = match archiver.create_backup(records_path, self.workspace.root()) {
            Ok(path) => {
                self.formatter
                    .success(&format!("Backup created: {}", file_name_of(&path)));
                path
            }
            Err(e) => {
                self.report_failure(&e);
                return;
            }
        };

        let archive_dir = self.workspace.archive_path();
        match archiver.ensure_archive_dir(&archive_dir) {
            Ok(true) => self
                .formatter
                .line(&format!("Created archive folder: {}", archive_dir.display())),
            Ok(false) => {}
            Err(e) => {
                self.report_failure(&e);
                return;
            }
        }

        match archiver.move_into_archive(&backup_path, &archive_dir) {
            Ok(archived) => {
                self.formatter
                    .success(&format!("Backup moved to Archive: {}", file_name_of(&archived)));

                match workspace::list_entries(&archive_dir) {
                    Ok(entries) => {
                        self.formatter.blank_line();
                        self.formatter.line("Files in Archive:");
                        for entry in &entries {
                            self.formatter.list_item(entry);
                        }
                        self.log.info(&format!(
                            "{} created and archived successfully.",
                            file_name_of(records_path)
                        ));
                    }
                    Err(e) => self.report_failure(&e),
                }
            }
            Err(e) => self.report_failure(&e),
        }
    }

    fn delete_step(&self, prompter: &mut dyn Prompter, skip_delete: bool) {
        self.formatter.blank_line();

        let wants_delete = !skip_delete
            && prompt::confirm(
                prompter,
                &self.interrupts,
                &format!(
                    "Would you like to delete a file from the {} folder? (Yes/No): ",
                    self.workspace.root().display()
                ),
            );

        if wants_delete {
            match prompt::ask(
                prompter,
                &self.interrupts,
                "Enter filename to delete (include extension): ",
            ) {
                Some(name) if !name.is_empty() => self.delete_named_file(&name),
                _ => self.formatter.line("No deletion performed."),
            }
        } else {
            self.formatter.line("No deletion performed.");
        }

        match self.workspace.list_entries() {
            Ok(entries) => {
                self.formatter.blank_line();
                self.formatter.line(&format!(
                    "Remaining files in {}:",
                    self.workspace.root().display()
                ));
                for entry in &entries {
                    self.formatter.list_item(entry);
                }
            }
            Err(e) => self.report_failure(&e),
        }
    }

    fn delete_named_file(&self, name: &str) {
        match maintenance::delete_file(self.workspace.root(), name) {
            Ok(DeleteOutcome::Deleted) => {
                self.formatter.success(&format!("Deleted file: {}", name));
                self.log.info(&format!("{} deleted by user.", name));
            }
            Ok(DeleteOutcome::NotFound) => {
                self.formatter.error(&format!("File not found: {}", name));
                self.log
                    .error(&format!("Deletion attempted for missing file: {}", name));
            }
            Err(e) => self.report_failure(&e),
        }
    }

    fn report_failure(&self, error: &StudentFilesError) {
        self.formatter.print_user_friendly_error(error);
        self.log.error(&error.user_message());
    }

    /// Generate a sample configuration file.
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(StudentFilesError::Io)?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.formatter
    }

    /// Handle error with user-friendly output.
    pub fn handle_error(&self, error: &StudentFilesError) {
        self.formatter.print_user_friendly_error(error);
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Get version information.
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
