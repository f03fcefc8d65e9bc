use crate::CsvPoint;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SaveCsvRequest {
    /// Markers in the order they should appear in the file (required, non-empty)
    #[serde(default)]
    pub points: Option<Vec<CsvPoint>>,
}
