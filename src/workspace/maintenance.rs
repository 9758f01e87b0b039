use crate::error::{Result, StudentFilesError};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Delete `name` from the top level of `folder`. A missing file is an
/// outcome, not an error; the caller logs it with not-found semantics.
pub fn delete_file(folder: &Path, name: &str) -> Result<DeleteOutcome> {
    let target = folder.join(name);

    if !target.exists() {
        return Ok(DeleteOutcome::NotFound);
    }

    fs::remove_file(&target).map_err(|e| StudentFilesError::Delete {
        path: name.to_string(),
        source: e,
    })?;

    Ok(DeleteOutcome::Deleted)
}
