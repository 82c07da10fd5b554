use serde::{Deserialize, Serialize};
use std::fmt;

/// Durable form of an incremental offset.
///
/// Serializes as a bare JSON number or string so it can sit directly in a
/// source offset map.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum OffsetValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for OffsetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffsetValue::Number(n) => write!(f, "{n}"),
            OffsetValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<OffsetValue> for serde_json::Value {
    fn from(value: OffsetValue) -> Self {
        match value {
            OffsetValue::Number(n) => serde_json::Value::from(n),
            OffsetValue::Text(s) => serde_json::Value::String(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_as_bare_json() {
        assert_eq!(serde_json::to_value(OffsetValue::Number(42)).unwrap(), json!(42));
        assert_eq!(
            serde_json::to_value(OffsetValue::Text("AP8=".into())).unwrap(),
            json!("AP8=")
        );
    }

    #[test]
    fn test_deserializes_by_json_kind() {
        let n: OffsetValue = serde_json::from_str("42").unwrap();
        assert_eq!(n, OffsetValue::Number(42));

        let s: OffsetValue = serde_json::from_str("\"AP8=\"").unwrap();
        assert_eq!(s, OffsetValue::Text("AP8=".into()));

        let missing: Option<OffsetValue> = serde_json::from_str("null").unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_into_json_value() {
        let v: serde_json::Value = OffsetValue::Number(-7).into();
        assert_eq!(v, json!(-7));
    }
}
