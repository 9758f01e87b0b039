use crate::error::{Result, StudentFilesError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub workspace: WorkspaceConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkspaceConfig {
    pub root_dir: PathBuf,
    pub archive_dir: String,
    pub log_filename: String,
    pub student_count: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("StudentFiles"),
            archive_dir: "Archive".to_string(),
            log_filename: "activity_log.txt".to_string(),
            student_count: 5,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("students.json"),
            output: PathBuf::from("report.csv"),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(StudentFilesError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| StudentFilesError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| StudentFilesError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["studentfiles.toml", ".studentfiles.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref root_dir) = cli_args.root_dir {
            self.workspace.root_dir = root_dir.clone();
        }

        if let Some(student_count) = cli_args.student_count {
            self.workspace.student_count = student_count;
        }

        if let Some(ref input) = cli_args.report_input {
            self.report.input = input.clone();
        }

        if let Some(ref output) = cli_args.report_output {
            self.report.output = output.clone();
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| StudentFilesError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| StudentFilesError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.workspace.root_dir.as_os_str().is_empty() {
            return Err(StudentFilesError::Config {
                message: "Working folder path must not be empty".to_string(),
            });
        }

        if self.workspace.student_count == 0 {
            return Err(StudentFilesError::Config {
                message: "Student count must be greater than 0".to_string(),
            });
        }

        // Archive dir and log filename are joined onto the workspace root;
        // path separators would escape it.
        for (label, value) in [
            ("Archive folder name", &self.workspace.archive_dir),
            ("Log filename", &self.workspace.log_filename),
        ] {
            if value.is_empty() {
                return Err(StudentFilesError::Config {
                    message: format!("{} must not be empty", label),
                });
            }
            if value.contains('/') || value.contains('\\') {
                return Err(StudentFilesError::Config {
                    message: format!("{} must be a bare name, not a path: {}", label, value),
                });
            }
        }

        if self.report.input.as_os_str().is_empty() || self.report.output.as_os_str().is_empty() {
            return Err(StudentFilesError::Config {
                message: "Report input and output paths must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub root_dir: Option<PathBuf>,
    pub student_count: Option<usize>,
    pub report_input: Option<PathBuf>,
    pub report_output: Option<PathBuf>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_dir(mut self, root_dir: Option<PathBuf>) -> Self {
        self.root_dir = root_dir;
        self
    }

    pub fn with_student_count(mut self, count: Option<usize>) -> Self {
        self.student_count = count;
        self
    }

    pub fn with_report_input(mut self, input: Option<PathBuf>) -> Self {
        self.report_input = input;
        self
    }

    pub fn with_report_output(mut self, output: Option<PathBuf>) -> Self {
        self.report_output = output;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.workspace.root_dir, PathBuf::from("StudentFiles"));
        assert_eq!(config.workspace.archive_dir, "Archive");
        assert_eq!(config.workspace.log_filename, "activity_log.txt");
        assert_eq!(config.workspace.student_count, 5);
        assert_eq!(config.report.input, PathBuf::from("students.json"));
        assert_eq!(config.report.output, PathBuf::from("report.csv"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.workspace.student_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_archive_dir_must_be_bare_name() {
        let mut config = Config::default();
        config.workspace.archive_dir = "../outside".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_operations() {
        let config = Config::default();
        let temp_file = NamedTempFile::new().unwrap();

        config.save_to_file(temp_file.path()).unwrap();

        let loaded_config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.workspace.student_count,
            loaded_config.workspace.student_count
        );
        assert_eq!(config.workspace.root_dir, loaded_config.workspace.root_dir);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();

        let overrides = CliOverrides::new()
            .with_root_dir(Some(PathBuf::from("OtherFiles")))
            .with_student_count(Some(3));

        config.merge_with_cli_args(&overrides);

        assert_eq!(config.workspace.root_dir, PathBuf::from("OtherFiles"));
        assert_eq!(config.workspace.student_count, 3);
        // Untouched fields keep their defaults.
        assert_eq!(config.workspace.archive_dir, "Archive");
        assert_eq!(config.report.output, PathBuf::from("report.csv"));
    }

    #[test]
    fn test_sample_config_generation() {
        let sample = Config::create_sample_config();
        assert!(!sample.is_empty());
        assert!(sample.contains("[workspace]"));
        assert!(sample.contains("[report]"));
    }
}
