use serde::Deserialize;
use serde_json::Value;

/// One marker in a CSV export request. Values are kept as sent; coordinates
/// are not validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CsvPoint {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub latitude: Value,
    #[serde(default)]
    pub longitude: Value,
}
