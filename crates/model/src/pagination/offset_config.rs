use crate::pagination::cursor::QualCol;
use serde::{Deserialize, Deserializer};

/// Settings for tracking one incremental column.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IncrementalConfig {
    /// Column that feeds the offset, e.g. "orders.id" or "row_version".
    #[serde(deserialize_with = "deserialize_qual_col")]
    pub column: QualCol,

    /// Emit offset values as TRACE events.
    #[serde(default)]
    pub trace_values: bool,
}

impl IncrementalConfig {
    pub fn new(column: &str) -> Self {
        Self {
            column: parse_qual_col(column),
            trace_values: false,
        }
    }

    pub fn with_trace_values(mut self, enabled: bool) -> Self {
        self.trace_values = enabled;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn parse_qual_col(s: &str) -> QualCol {
    let Ok(col) = s.parse::<QualCol>();
    col
}

fn deserialize_qual_col<'de, D>(deserializer: D) -> Result<QualCol, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.trim().is_empty() {
        return Err(serde::de::Error::custom("incremental column must not be empty"));
    }
    Ok(parse_qual_col(raw.trim()))
}
