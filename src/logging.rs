use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only activity log. Entries go to the log file inside the working
/// folder; if that location is unwritable, the same entry is retried against
/// a log file in the process current directory. Only the fallback's own
/// failure is swallowed.
pub struct ActivityLog {
    primary: PathBuf,
    fallback: PathBuf,
}

impl ActivityLog {
    pub fn new(workspace_root: &Path, log_filename: &str) -> Self {
        Self {
            primary: workspace_root.join(log_filename),
            fallback: PathBuf::from(log_filename),
        }
    }

    pub fn with_paths(primary: PathBuf, fallback: PathBuf) -> Self {
        Self { primary, fallback }
    }

    pub fn info(&self, message: &str) {
        self.append(&format!("[{}] {}\n", timestamp(), message));
    }

    pub fn error(&self, message: &str) {
        self.append(&format!("[{}] ERROR: {}\n", timestamp(), message));
    }

    pub fn primary_path(&self) -> &Path {
        &self.primary
    }

    fn append(&self, entry: &str) {
        if append_to(&self.primary, entry).is_err() {
            let _ = append_to(&self.fallback, entry);
        }
    }
}

fn append_to(path: &Path, entry: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(entry.as_bytes())
}

/// Local wall-clock time in the log and console format.
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_entries_are_appended_with_timestamps() {
        let temp_dir = TempDir::new().unwrap();
        let log = ActivityLog::new(temp_dir.path(), "activity_log.txt");

        log.info("records_2024-01-01.txt created successfully.");
        log.error("Deletion attempted for missing file: ghost.txt");

        let content = fs::read_to_string(temp_dir.path().join("activity_log.txt")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("records_2024-01-01.txt created successfully."));
        assert!(lines[1].contains("] ERROR: Deletion attempted for missing file: ghost.txt"));
    }

    #[test]
    fn test_log_grows_across_instances() {
        let temp_dir = TempDir::new().unwrap();

        for run in 0..3 {
            let log = ActivityLog::new(temp_dir.path(), "activity_log.txt");
            log.info(&format!("run {}", run));
        }

        let content = fs::read_to_string(temp_dir.path().join("activity_log.txt")).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_fallback_when_primary_unwritable() {
        let temp_dir = TempDir::new().unwrap();
        let primary = temp_dir.path().join("no_such_dir").join("activity_log.txt");
        let fallback = temp_dir.path().join("fallback_log.txt");
        let log = ActivityLog::with_paths(primary.clone(), fallback.clone());

        log.error("workspace unavailable");

        assert!(!primary.exists());
        let content = fs::read_to_string(&fallback).unwrap();
        assert!(content.contains("ERROR: workspace unavailable"));
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }
}
