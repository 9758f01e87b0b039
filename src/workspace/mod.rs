pub mod archive;
pub mod maintenance;
pub mod records;

pub use archive::Archiver;
pub use maintenance::{delete_file, DeleteOutcome};
pub use records::{records_filename, write_records, FileMetadata};

use crate::config::WorkspaceConfig;
use crate::error::{Result, StudentFilesError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceStatus {
    Created,
    AlreadyExisting,
}

/// The working folder every program-1 operation reads from and writes to,
/// with the configured names of its archive subfolder and log file.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    archive_dir: String,
    log_filename: String,
}

impl Workspace {
    pub fn new(config: &WorkspaceConfig) -> Self {
        Self {
            root: config.root_dir.clone(),
            archive_dir: config.archive_dir.clone(),
            log_filename: config.log_filename.clone(),
        }
    }

    /// Create the working folder (and any missing parents) if absent.
    /// The folder is never deleted by this program.
    pub fn ensure(&self) -> Result<WorkspaceStatus> {
        if self.root.exists() {
            return Ok(WorkspaceStatus::AlreadyExisting);
        }

        fs::create_dir_all(&self.root).map_err(|e| StudentFilesError::Workspace {
            path: self.root.display().to_string(),
            source: e,
        })?;

        Ok(WorkspaceStatus::Created)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute form of the root for display; falls back to the configured
    /// path when canonicalization fails (e.g. the folder is gone).
    pub fn display_root(&self) -> PathBuf {
        self.root
            .canonicalize()
            .unwrap_or_else(|_| self.root.clone())
    }

    pub fn archive_path(&self) -> PathBuf {
        self.root.join(&self.archive_dir)
    }

    pub fn log_filename(&self) -> &str {
        &self.log_filename
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Names of the top-level entries in the working folder, sorted.
    pub fn list_entries(&self) -> Result<Vec<String>> {
        list_entries(&self.root)
    }
}

/// Names of the top-level entries of `dir`, sorted by file name.
pub fn list_entries(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| StudentFilesError::Listing {
            path: dir.display().to_string(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
        })?;
        names.push(entry.file_name().to_string_lossy().to_string());
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_workspace(root: &Path) -> Workspace {
        let config = WorkspaceConfig {
            root_dir: root.to_path_buf(),
            ..WorkspaceConfig::default()
        };
        Workspace::new(&config)
    }

    #[test]
    fn test_ensure_creates_missing_folder() {
        let temp_dir = TempDir::new().unwrap();
        let workspace = test_workspace(&temp_dir.path().join("StudentFiles"));

        assert_eq!(workspace.ensure().unwrap(), WorkspaceStatus::Created);
        assert!(workspace.root().is_dir());

        // Second call observes the existing folder.
        assert_eq!(workspace.ensure().unwrap(), WorkspaceStatus::AlreadyExisting);
    }

    #[test]
    fn test_ensure_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let workspace = test_workspace(&temp_dir.path().join("a").join("b").join("StudentFiles"));

        assert_eq!(workspace.ensure().unwrap(), WorkspaceStatus::Created);
        assert!(workspace.root().is_dir());
    }

    #[test]
    fn test_path_helpers_follow_config() {
        let temp_dir = TempDir::new().unwrap();
        let workspace = test_workspace(temp_dir.path());

        assert_eq!(workspace.archive_path(), temp_dir.path().join("Archive"));
        assert_eq!(
            workspace.file_path("records_2024-01-01.txt"),
            temp_dir.path().join("records_2024-01-01.txt")
        );
        assert_eq!(workspace.log_filename(), "activity_log.txt");
    }

    #[test]
    fn test_list_entries_sorted_top_level_only() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        std::fs::create_dir(temp_dir.path().join("Archive")).unwrap();
        std::fs::write(temp_dir.path().join("Archive").join("nested.txt"), "n").unwrap();

        let names = list_entries(temp_dir.path()).unwrap();
        assert_eq!(names, vec!["Archive", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_list_entries_missing_dir_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone");
        assert!(list_entries(&missing).is_err());
    }
}
