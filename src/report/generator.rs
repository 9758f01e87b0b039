use crate::config::ReportConfig;
use crate::error::{Result, StudentFilesError};
use crate::report::model::{rows_from_value, sort_rows, ReportRow};
use serde_json::Value;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub rows_written: usize,
    pub output: PathBuf,
}

/// Reads the student records JSON, computes per-student averages, and
/// writes the CSV sorted by average descending. The output file is only
/// touched once the whole input has parsed; a failed run never leaves a
/// partial report behind.
pub struct ReportGenerator {
    input: PathBuf,
    output: PathBuf,
}

impl ReportGenerator {
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            input: config.input.clone(),
            output: config.output.clone(),
        }
    }

    pub fn with_paths(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }

    pub fn run(&self) -> Result<ReportSummary> {
        let mut rows = self.load_rows()?;
        sort_rows(&mut rows);
        self.write_csv(&rows)?;

        Ok(ReportSummary {
            rows_written: rows.len(),
            output: self.output.clone(),
        })
    }

    pub fn load_rows(&self) -> Result<Vec<ReportRow>> {
        let input_name = self.input.display().to_string();

        let content = fs::read_to_string(&self.input).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StudentFilesError::InputNotFound {
                    path: input_name.clone(),
                }
            } else {
                StudentFilesError::ContentRead {
                    path: input_name.clone(),
                    source: e,
                }
            }
        })?;

        let doc: Value =
            serde_json::from_str(&content).map_err(|e| StudentFilesError::InvalidJson {
                path: input_name.clone(),
                message: e.to_string(),
            })?;

        rows_from_value(&doc, &input_name)
    }

    fn write_csv(&self, rows: &[ReportRow]) -> Result<()> {
        let file =
            fs::File::create(&self.output).map_err(|e| csv_error(&self.output, e))?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "id,name,average").map_err(|e| csv_error(&self.output, e))?;
        for row in rows {
            writeln!(
                writer,
                "{},{},{:.2}",
                csv_field(&row.id),
                csv_field(&row.name),
                row.average
            )
            .map_err(|e| csv_error(&self.output, e))?;
        }

        writer.flush().map_err(|e| csv_error(&self.output, e))?;
        Ok(())
    }
}

fn csv_error(path: &Path, source: std::io::Error) -> StudentFilesError {
    StudentFilesError::CsvWrite {
        path: path.display().to_string(),
        source,
    }
}

/// Quote a field only when it needs it (comma, quote, or newline inside).
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
