use crate::pagination::{incremental::IncrementalValue, offset::OffsetValue};
use tracing::trace;

/// Diagnostic hooks around offset handling.
///
/// Hooks only see shared references and return nothing; they cannot change
/// what gets bound or persisted.
pub trait OffsetObserver: Send + Sync {
    fn on_classified(&self, _column: &str, _value: &IncrementalValue) {}

    fn on_bind(&self, _column: &str, _position: usize, _value: &IncrementalValue) {}

    fn on_render(&self, _column: &str, _rendered: &OffsetValue) {}
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl OffsetObserver for NoopObserver {}

/// Emits offset values at TRACE level.
pub struct TracingObserver;

impl OffsetObserver for TracingObserver {
    fn on_classified(&self, column: &str, value: &IncrementalValue) {
        match value {
            IncrementalValue::Integral(v) => trace!(column, value = v, "Integral offset value"),
            IncrementalValue::Opaque(bytes) => {
                trace!(column, bytes = ?bytes.as_bytes(), "Bytes offset value")
            }
        }
    }

    fn on_bind(&self, column: &str, position: usize, value: &IncrementalValue) {
        match value {
            IncrementalValue::Integral(v) => {
                trace!(column, position, value = v, "Set integral offset to statement")
            }
            IncrementalValue::Opaque(bytes) => {
                trace!(column, position, bytes = ?bytes.as_bytes(), "Set bytes offset to statement")
            }
        }
    }

    fn on_render(&self, column: &str, rendered: &OffsetValue) {
        trace!(column, offset = %rendered, "Rendered offset value");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_tracing_observer_logs_values() {
        let observer = TracingObserver;
        let value = IncrementalValue::from_bytes(&[0x00, 0xff]);

        observer.on_classified("row_version", &value);
        observer.on_bind("row_version", 1, &value);
        observer.on_render("row_version", &value.render());

        assert!(logs_contain("Bytes offset value"));
        assert!(logs_contain("Set bytes offset to statement"));
        assert!(logs_contain("AP8="));
    }

    #[traced_test]
    #[test]
    fn test_noop_observer_is_silent() {
        let observer = NoopObserver;
        observer.on_classified("id", &IncrementalValue::Integral(1));
        observer.on_render("id", &OffsetValue::Number(1));
        assert!(!logs_contain("offset value"));
    }
}
