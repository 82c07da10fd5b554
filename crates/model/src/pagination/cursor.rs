use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// A column reference, optionally qualified by the table or alias used in FROM.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualCol {
    pub table: String,
    pub column: String,
}

impl QualCol {
    pub fn is_qualified(&self) -> bool {
        !self.table.is_empty()
    }
}

impl FromStr for QualCol {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((table, column)) if !column.contains('.') => Ok(QualCol {
                table: table.to_string(),
                column: column.to_string(),
            }),
            _ => Ok(QualCol {
                table: "".to_string(),
                column: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for QualCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_qualified() {
            write!(f, "{}.{}", self.table, self.column)
        } else {
            write!(f, "{}", self.column)
        }
    }
}
