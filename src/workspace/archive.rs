use crate::error::{Result, StudentFilesError};
use std::fs;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Backs a records file up and relocates the copy into the archive folder.
/// The three stages are independent; the caller stops at the first failed
/// one without touching the stages after it.
pub struct Archiver {
    preserve_mtime: bool,
    buffer_size: usize,
}

impl Archiver {
    pub fn new() -> Self {
        Self {
            preserve_mtime: true,
            buffer_size: 64 * 1024,
        }
    }

    pub fn with_preserve_mtime(mut self, preserve: bool) -> Self {
        self.preserve_mtime = preserve;
        self
    }

    /// Stage 1: copy `source` to `<folder>/backup_<basename>`.
    pub fn create_backup(&self, source: &Path, folder: &Path) -> Result<PathBuf> {
        let base_name = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| backup_error(source, invalid_input("source has no file name")))?;

        let backup_path = folder.join(format!("backup_{}", base_name));
        self.copy_file(source, &backup_path)
            .map_err(|e| backup_error(source, e))?;

        Ok(backup_path)
    }

    /// Stage 2: make sure the archive folder exists. The flag reports
    /// whether it was created by this call.
    pub fn ensure_archive_dir(&self, archive_dir: &Path) -> Result<bool> {
        if archive_dir.exists() {
            return Ok(false);
        }

        fs::create_dir_all(archive_dir).map_err(|e| StudentFilesError::ArchiveDir {
            path: archive_dir.display().to_string(),
            source: e,
        })?;

        Ok(true)
    }

    /// Stage 3: relocate the backup into the archive folder. Nothing is
    /// left at the pre-archive location on success.
    pub fn move_into_archive(&self, backup_path: &Path, archive_dir: &Path) -> Result<PathBuf> {
        let file_name = backup_path.file_name().ok_or_else(|| {
            move_error(backup_path, archive_dir, invalid_input("backup has no file name"))
        })?;
        let dest = archive_dir.join(file_name);

        match fs::rename(backup_path, &dest) {
            Ok(()) => {}
            // Rename fails across filesystems; fall back to copy + remove.
            Err(_) => {
                self.copy_file(backup_path, &dest)
                    .and_then(|_| fs::remove_file(backup_path))
                    .map_err(|e| move_error(backup_path, archive_dir, e))?;
            }
        }

        Ok(dest)
    }

    fn copy_file(&self, source: &Path, dest: &Path) -> std::io::Result<u64> {
        let source_file = fs::File::open(source)?;
        let dest_file = fs::File::create(dest)?;

        let mut reader = BufReader::with_capacity(self.buffer_size, source_file);
        let mut writer = BufWriter::with_capacity(self.buffer_size, dest_file);

        let mut total_bytes = 0u64;
        let mut buffer = vec![0u8; 8192];

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            writer.write_all(&buffer[..bytes_read])?;
            total_bytes += bytes_read as u64;
        }

        writer.flush()?;

        if self.preserve_mtime {
            if let Ok(modified) = fs::metadata(source).and_then(|m| m.modified()) {
                let _ = filetime::set_file_mtime(
                    dest,
                    filetime::FileTime::from_system_time(modified),
                );
            }
        }

        Ok(total_bytes)
    }
}

impl Default for Archiver {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_input(message: &str) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, message.to_string())
}

fn backup_error(source: &Path, error: std::io::Error) -> StudentFilesError {
    StudentFilesError::Backup {
        path: source.display().to_string(),
        source: error,
    }
}

fn move_error(from: &Path, to: &Path, error: std::io::Error) -> StudentFilesError {
    StudentFilesError::ArchiveMove {
        from: from.display().to_string(),
        to: to.display().to_string(),
        source: error,
    }
}
