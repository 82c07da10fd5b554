use crate::{
    core::value::Value,
    pagination::{binder::StatementBinder, error::IncrementalError, offset::OffsetValue},
};
use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use bigdecimal::{BigDecimal, ToPrimitive};
use std::fmt;

/// Standard alphabet, padded output. Decoding is lenient: padding is
/// optional and unused bits in the last symbol are ignored.
const OFFSET_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// 2^63, the smallest float that no longer fits in an i64.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Last known position of a tracked column.
///
/// Values are immutable: a newer position is a new instance. Equality and
/// hashing are structural, so `Integral(5)` never equals an `Opaque` value
/// even if the bytes spell "5".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IncrementalValue {
    /// Monotonically increasing numeric position, persisted as a number.
    Integral(i64),
    /// Arbitrary bytes (row-version, timestamp-as-bytes), persisted as base64 text.
    Opaque(OpaqueOffset),
}

impl IncrementalValue {
    /// Classifies a raw column value.
    ///
    /// Returns `Ok(None)` for `Null`, meaning no offset has been recorded yet.
    /// Numbers truncate toward zero, bytes are copied as is and strings are
    /// taken to be base64 text.
    pub fn classify(raw: &Value) -> Result<Option<Self>, IncrementalError> {
        let value = match raw {
            Value::Null => return Ok(None),
            Value::SmallInt(v) => Self::Integral(i64::from(*v)),
            Value::Int32(v) => Self::Integral(i64::from(*v)),
            Value::Int(v) => Self::Integral(*v),
            Value::Uint(v) => Self::Integral(
                i64::try_from(*v).map_err(|_| IncrementalError::NumericOverflow(v.to_string()))?,
            ),
            Value::Float(v) => Self::Integral(truncate_f64(*v)?),
            Value::Decimal(v) => Self::Integral(truncate_decimal(v)?),
            Value::Bytes(bytes) => Self::Opaque(OpaqueOffset::from_bytes(bytes)),
            Value::String(text) => Self::Opaque(OpaqueOffset::from_base64(text)?),
            other => {
                return Err(IncrementalError::UnsupportedType {
                    value: other.to_string(),
                    type_name: other.type_name(),
                });
            }
        };

        Ok(Some(value))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::Opaque(OpaqueOffset::from_bytes(bytes))
    }

    pub fn from_base64(text: &str) -> Result<Self, IncrementalError> {
        OpaqueOffset::from_base64(text).map(Self::Opaque)
    }

    /// Rebuilds a value from its persisted form.
    pub fn from_offset(offset: &OffsetValue) -> Result<Self, IncrementalError> {
        match offset {
            OffsetValue::Number(n) => Ok(Self::Integral(*n)),
            OffsetValue::Text(text) => Self::from_base64(text),
        }
    }

    /// Writes the value into the parameter slot at `position`.
    pub fn bind<B>(&self, stmt: &mut B, position: usize) -> Result<(), B::Error>
    where
        B: StatementBinder + ?Sized,
    {
        match self {
            Self::Integral(v) => stmt.bind_i64(position, *v),
            Self::Opaque(bytes) => stmt.bind_bytes(position, bytes.as_bytes()),
        }
    }

    /// Form written to offset storage.
    pub fn render(&self) -> OffsetValue {
        match self {
            Self::Integral(v) => OffsetValue::Number(*v),
            Self::Opaque(bytes) => OffsetValue::Text(bytes.to_base64()),
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Integral(_) => None,
            Self::Opaque(bytes) => Some(bytes.as_bytes()),
        }
    }
}

impl From<i64> for IncrementalValue {
    fn from(value: i64) -> Self {
        Self::Integral(value)
    }
}

impl From<Vec<u8>> for IncrementalValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Opaque(OpaqueOffset::from(value))
    }
}

impl fmt::Display for IncrementalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integral(v) => write!(f, "{v}"),
            Self::Opaque(bytes) => write!(f, "{}", bytes.to_base64()),
        }
    }
}

/// Owned byte payload of an opaque offset.
///
/// The buffer is copied or moved in on construction and never exposed
/// mutably, so the caller's buffer can change afterwards without effect.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpaqueOffset(Box<[u8]>);

impl OpaqueOffset {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }

    /// Decodes base64 text. Malformed input is an error, never truncated.
    pub fn from_base64(text: &str) -> Result<Self, IncrementalError> {
        let bytes = OFFSET_BASE64.decode(text)?;
        Ok(Self(bytes.into_boxed_slice()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Canonical padded base64 of exactly these bytes.
    pub fn to_base64(&self) -> String {
        OFFSET_BASE64.encode(&self.0)
    }
}

impl From<Vec<u8>> for OpaqueOffset {
    fn from(value: Vec<u8>) -> Self {
        Self(value.into_boxed_slice())
    }
}

impl AsRef<[u8]> for OpaqueOffset {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for OpaqueOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpaqueOffset").field(&self.to_base64()).finish()
    }
}

fn truncate_f64(v: f64) -> Result<i64, IncrementalError> {
    let truncated = v.trunc();
    if truncated.is_finite() && (-I64_UPPER_BOUND..I64_UPPER_BOUND).contains(&truncated) {
        Ok(truncated as i64)
    } else {
        Err(IncrementalError::NumericOverflow(v.to_string()))
    }
}

fn truncate_decimal(v: &BigDecimal) -> Result<i64, IncrementalError> {
    // with_scale drops fractional digits without rounding
    v.with_scale(0)
        .to_i64()
        .ok_or_else(|| IncrementalError::NumericOverflow(v.to_string()))
}
