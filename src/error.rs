use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudentFilesError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not create or access working folder: {path}")]
    Workspace {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write records file: {path}")]
    RecordsWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file: {path}")]
    ContentRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to retrieve metadata for: {path}")]
    Metadata {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create backup copy: {path}")]
    Backup {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create archive folder: {path}")]
    ArchiveDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move backup into archive: {from} -> {to}")]
    ArchiveMove {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete file: {path}")]
    Delete {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list folder: {path}")]
    Listing {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {name}")]
    FileNotFound { name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: String, message: String },

    #[error("Expected a JSON array at the top level of {path}")]
    NotAnArray { path: String },

    #[error("Failed to write report: {path}")]
    CsvWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Operation was cancelled by user")]
    Cancelled,
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for StudentFilesError {
    fn user_message(&self) -> String {
        match self {
            StudentFilesError::Workspace { path, source } => {
                format!("Could not create or access '{}': {}", path, source)
            }
            StudentFilesError::RecordsWrite { path, source } => {
                format!("Could not write file '{}': {}", path, source)
            }
            StudentFilesError::ContentRead { path, source } => {
                format!("Error reading file '{}': {}", path, source)
            }
            StudentFilesError::Metadata { path, source } => {
                format!("Error retrieving metadata for '{}': {}", path, source)
            }
            StudentFilesError::Backup { path, source } => {
                format!("Error creating backup for '{}': {}", path, source)
            }
            StudentFilesError::ArchiveDir { path, source } => {
                format!("Error creating archive folder '{}': {}", path, source)
            }
            StudentFilesError::ArchiveMove { from, to, source } => {
                format!("Error moving backup '{}' to '{}': {}", from, to, source)
            }
            StudentFilesError::Delete { path, source } => {
                format!("Error deleting file '{}': {}", path, source)
            }
            StudentFilesError::Listing { path, source } => {
                format!("Could not list files in '{}': {}", path, source)
            }
            StudentFilesError::FileNotFound { name } => {
                format!("File not found: {}", name)
            }
            StudentFilesError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            StudentFilesError::InputNotFound { path } => {
                format!("'{}' not found", path)
            }
            StudentFilesError::InvalidJson { path, message } => {
                format!("Invalid JSON format in '{}': {}", path, message)
            }
            StudentFilesError::NotAnArray { path } => {
                format!("Expected a JSON array in '{}'", path)
            }
            StudentFilesError::CsvWrite { path, source } => {
                format!("Failed to write '{}': {}", path, source)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            StudentFilesError::Workspace { .. } => Some(
                "Check that the parent directory exists and that you have write permission there."
                    .to_string(),
            ),
            StudentFilesError::FileNotFound { .. } => Some(
                "List the folder contents to see the exact filenames, including extensions."
                    .to_string(),
            ),
            StudentFilesError::InputNotFound { path } => Some(format!(
                "Place '{}' in the current directory, or point at it with --input.",
                path
            )),
            StudentFilesError::InvalidJson { .. } => Some(
                "Validate the file with a JSON checker; truncated or hand-edited files are the usual cause."
                    .to_string(),
            ),
            StudentFilesError::NotAnArray { .. } => Some(
                "The input must be a JSON array of student objects, e.g. [{\"id\": 1, \"name\": \"A\", \"scores\": [90]}]."
                    .to_string(),
            ),
            StudentFilesError::Config { .. } => Some(
                "Check the configuration file syntax and ensure all required fields are present."
                    .to_string(),
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for StudentFilesError {
    fn from(error: toml::de::Error) -> Self {
        StudentFilesError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StudentFilesError>;
