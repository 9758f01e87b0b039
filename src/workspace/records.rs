use crate::error::{Result, StudentFilesError};
use crate::workspace::Workspace;
use chrono::{DateTime, Local, NaiveDate};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Records filename for a given date: `records_<YYYY-MM-DD>.txt`.
pub fn records_filename(date: NaiveDate) -> String {
    format!("records_{}.txt", date.format("%Y-%m-%d"))
}

pub fn todays_records_filename() -> String {
    records_filename(Local::now().date_naive())
}

/// Write the names to today's records file inside the workspace, one per
/// line, truncating any earlier same-day file. Returns the full path.
pub fn write_records(workspace: &Workspace, names: &[String]) -> Result<PathBuf> {
    let full_path = workspace.file_path(&todays_records_filename());
    write_records_to(&full_path, names)?;
    Ok(full_path)
}

pub fn write_records_to(path: &Path, names: &[String]) -> Result<()> {
    let file = fs::File::create(path).map_err(|e| records_error(path, e))?;
    let mut writer = BufWriter::new(file);

    for name in names {
        writeln!(writer, "{}", name).map_err(|e| records_error(path, e))?;
    }

    writer.flush().map_err(|e| records_error(path, e))?;
    Ok(())
}

fn records_error(path: &Path, source: std::io::Error) -> StudentFilesError {
    StudentFilesError::RecordsWrite {
        path: path.display().to_string(),
        source,
    }
}

/// Full UTF-8 contents of the file. Independent of [`read_metadata`]; a
/// failure here says nothing about whether metadata is retrievable.
pub fn read_contents(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| StudentFilesError::ContentRead {
        path: path.display().to_string(),
        source: e,
    })
}

#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub size: u64,
    pub modified: DateTime<Local>,
}

impl FileMetadata {
    pub fn modified_display(&self) -> String {
        self.modified.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Byte size and last-modified time of the file.
pub fn read_metadata(path: &Path) -> Result<FileMetadata> {
    let metadata = fs::metadata(path).map_err(|e| metadata_error(path, e))?;
    let modified = metadata.modified().map_err(|e| metadata_error(path, e))?;

    Ok(FileMetadata {
        size: metadata.len(),
        modified: DateTime::<Local>::from(modified),
    })
}

fn metadata_error(path: &Path, source: std::io::Error) -> StudentFilesError {
    StudentFilesError::Metadata {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkspaceConfig;
    use tempfile::TempDir;

    fn test_workspace(temp_dir: &TempDir) -> Workspace {
        let config = WorkspaceConfig {
            root_dir: temp_dir.path().to_path_buf(),
            ..WorkspaceConfig::default()
        };
        Workspace::new(&config)
    }

    #[test]
    fn test_records_filename_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(records_filename(date), "records_2024-03-07.txt");
    }

    #[test]
    fn test_write_records_one_name_per_line() {
        let temp_dir = TempDir::new().unwrap();
        let workspace = test_workspace(&temp_dir);
        let names = vec![
            "Alice".to_string(),
            "Student_2".to_string(),
            "Carol".to_string(),
        ];

        let path = write_records(&workspace, &names).unwrap();

        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("records_"));
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Alice\nStudent_2\nCarol\n");
    }

    #[test]
    fn test_same_day_rewrite_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let workspace = test_workspace(&temp_dir);

        let first = vec!["Alice".to_string(), "Bob".to_string()];
        let second = vec!["Zoe".to_string()];

        let path_a = write_records(&workspace, &first).unwrap();
        let path_b = write_records(&workspace, &second).unwrap();

        assert_eq!(path_a, path_b);
        let content = fs::read_to_string(&path_b).unwrap();
        assert_eq!(content, "Zoe\n");
    }

    #[test]
    fn test_write_to_missing_folder_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("records_x.txt");

        let result = write_records_to(&path, &["Alice".to_string()]);
        assert!(matches!(
            result,
            Err(StudentFilesError::RecordsWrite { .. })
        ));
    }

    #[test]
    fn test_read_contents_and_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records_2024-01-01.txt");
        fs::write(&path, "Alice\nBob\n").unwrap();

        assert_eq!(read_contents(&path).unwrap(), "Alice\nBob\n");

        let metadata = read_metadata(&path).unwrap();
        assert_eq!(metadata.size, 10);
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(metadata.modified_display().len(), 19);
    }

    #[test]
    fn test_read_failures_are_distinct_variants() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone.txt");

        assert!(matches!(
            read_contents(&missing),
            Err(StudentFilesError::ContentRead { .. })
        ));
        assert!(matches!(
            read_metadata(&missing),
            Err(StudentFilesError::Metadata { .. })
        ));
    }
}
