use thiserror::Error;

/// Errors raised while building an incremental offset from external input.
#[derive(Debug, Error)]
pub enum IncrementalError {
    /// The raw value has a shape that cannot act as an offset.
    #[error("Unsupported value (type): {value} ({type_name})")]
    UnsupportedType {
        value: String,
        type_name: &'static str,
    },

    /// Textual offset is not valid base64.
    #[error("Invalid base64 offset: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Numeric value does not fit a 64-bit signed integer after truncation.
    #[error("Numeric offset out of i64 range: {0}")]
    NumericOverflow(String),
}
