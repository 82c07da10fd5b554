use crate::error::TrackerError;
use model::{
    pagination::{
        binder::StatementBinder,
        cursor::QualCol,
        incremental::IncrementalValue,
        observer::{NoopObserver, OffsetObserver, TracingObserver},
        offset::OffsetValue,
        offset_config::IncrementalConfig,
    },
    records::row::RowData,
};
use std::sync::Arc;
use tracing::info;

/// Keeps the last known offset of one tracked column across polls.
///
/// Each poll binds the last offset into the resume query, feeds every
/// fetched row through [`observe`](Self::observe), and persists
/// [`offset`](Self::offset) once the batch is committed.
pub struct IncrementalTracker {
    column: QualCol,
    last: Option<IncrementalValue>,
    observer: Arc<dyn OffsetObserver>,
}

impl IncrementalTracker {
    pub fn new(config: IncrementalConfig) -> Self {
        let observer: Arc<dyn OffsetObserver> = if config.trace_values {
            Arc::new(TracingObserver)
        } else {
            Arc::new(NoopObserver)
        };

        Self {
            column: config.column,
            last: None,
            observer,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn OffsetObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn column(&self) -> &QualCol {
        &self.column
    }

    pub fn last_value(&self) -> Option<&IncrementalValue> {
        self.last.as_ref()
    }

    /// Restores the offset read from offset storage at startup.
    pub fn resume(&mut self, stored: Option<&OffsetValue>) -> Result<(), TrackerError> {
        let Some(stored) = stored else {
            info!(column = %self.column, "No stored offset, scanning from the start");
            self.last = None;
            return Ok(());
        };

        let value = IncrementalValue::from_offset(stored)?;
        info!(column = %self.column, "Resuming from stored offset");
        self.observer.on_classified(&self.column.column, &value);
        self.last = Some(value);
        Ok(())
    }

    /// Classifies the tracked column of `row` and supersedes the last offset.
    ///
    /// A null value leaves the last offset in place.
    pub fn observe(&mut self, row: &RowData) -> Result<Option<&IncrementalValue>, TrackerError> {
        let field = row
            .get(&self.column.column)
            .ok_or_else(|| TrackerError::ColumnNotFound(self.column.to_string()))?;

        let Some(raw) = field.value.as_ref() else {
            return Ok(self.last.as_ref());
        };

        if let Some(value) = IncrementalValue::classify(raw)? {
            self.observer.on_classified(&self.column.column, &value);
            self.last = Some(value);
        }

        Ok(self.last.as_ref())
    }

    /// Binds the last offset at `position`.
    ///
    /// Returns `Ok(false)` without touching the statement when no offset has
    /// been recorded yet. Binder errors are returned as is.
    pub fn bind<B>(&self, stmt: &mut B, position: usize) -> Result<bool, B::Error>
    where
        B: StatementBinder + ?Sized,
    {
        let Some(value) = &self.last else {
            return Ok(false);
        };

        value.bind(stmt, position)?;
        self.observer.on_bind(&self.column.column, position, value);
        Ok(true)
    }

    /// Rendered form of the last offset for offset storage.
    pub fn offset(&self) -> Option<OffsetValue> {
        let rendered = self.last.as_ref()?.render();
        self.observer.on_render(&self.column.column, &rendered);
        Some(rendered)
    }
}
