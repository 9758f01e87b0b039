pub mod generator;
pub mod model;

pub use generator::{ReportGenerator, ReportSummary};
pub use model::{rows_from_value, score_average, sort_rows, ReportRow};
