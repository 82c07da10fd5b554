use crate::sql::base::error::BindError;
use model::pagination::binder::StatementBinder;

/// A value written into a parameter slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundParam {
    Int(i64),
    Bytes(Vec<u8>),
}

/// 1-based positional parameter slots of a prepared statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSlots {
    slots: Vec<Option<BoundParam>>,
    closed: bool,
}

impl ParamSlots {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![None; count],
            closed: false,
        }
    }

    pub fn count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Marks the statement unusable; later binds fail with `BindError::Closed`.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn get(&self, position: usize) -> Option<&BoundParam> {
        position
            .checked_sub(1)
            .and_then(|idx| self.slots.get(idx))
            .and_then(Option::as_ref)
    }

    /// Forgets all bound values so the statement can be reused.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// All bound values in position order.
    pub fn values(&self) -> Result<Vec<&BoundParam>, BindError> {
        if self.closed {
            return Err(BindError::Closed);
        }

        self.slots
            .iter()
            .enumerate()
            .map(|(idx, slot)| slot.as_ref().ok_or(BindError::Unbound(idx + 1)))
            .collect()
    }

    fn set(&mut self, position: usize, value: BoundParam) -> Result<(), BindError> {
        let idx = self.index(position)?;
        self.slots[idx] = Some(value);
        Ok(())
    }

    fn index(&self, position: usize) -> Result<usize, BindError> {
        if self.closed {
            return Err(BindError::Closed);
        }

        match position {
            0 => Err(BindError::PositionOutOfRange {
                position,
                count: self.count(),
            }),
            p if p > self.count() => Err(BindError::PositionOutOfRange {
                position,
                count: self.count(),
            }),
            p => Ok(p - 1),
        }
    }
}

impl StatementBinder for ParamSlots {
    type Error = BindError;

    fn bind_i64(&mut self, position: usize, value: i64) -> Result<(), Self::Error> {
        self.set(position, BoundParam::Int(value))
    }

    fn bind_bytes(&mut self, position: usize, value: &[u8]) -> Result<(), Self::Error> {
        self.set(position, BoundParam::Bytes(value.to_vec()))
    }
}
