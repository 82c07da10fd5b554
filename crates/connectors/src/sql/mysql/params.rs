use crate::sql::base::{
    error::BindError,
    params::{BoundParam, ParamSlots},
};
use model::pagination::binder::StatementBinder;
use mysql_async::Value as MySqlValue;
use mysql_common::params::Params;

pub struct MySqlParam(MySqlValue);

impl MySqlParam {
    pub fn from_bound(value: &BoundParam) -> Self {
        match value {
            BoundParam::Int(i) => MySqlParam(MySqlValue::Int(*i)),
            BoundParam::Bytes(b) => MySqlParam(MySqlValue::Bytes(b.clone())),
        }
    }

    pub fn value(&self) -> &MySqlValue {
        &self.0
    }
}

pub struct MySqlParamStore {
    pub params: Vec<MySqlParam>,
}

impl MySqlParamStore {
    pub fn from_bound(values: &[&BoundParam]) -> Self {
        let params = values.iter().map(|v| MySqlParam::from_bound(v)).collect();
        MySqlParamStore { params }
    }

    pub fn params(&self) -> Params {
        let mysql_values: Vec<MySqlValue> = self.params.iter().map(|p| p.0.clone()).collect();
        Params::Positional(mysql_values)
    }
}

/// Bind target for a prepared MySQL statement (`?` placeholders).
#[derive(Debug, Clone)]
pub struct MySqlStatementParams {
    slots: ParamSlots,
}

impl MySqlStatementParams {
    pub fn new(count: usize) -> Self {
        Self {
            slots: ParamSlots::new(count),
        }
    }

    pub fn slots(&self) -> &ParamSlots {
        &self.slots
    }

    pub fn close(&mut self) {
        self.slots.close();
    }

    /// Converts the bound values; fails if any position is still unbound.
    pub fn to_store(&self) -> Result<MySqlParamStore, BindError> {
        let values = self.slots.values()?;
        Ok(MySqlParamStore::from_bound(&values))
    }
}

impl StatementBinder for MySqlStatementParams {
    type Error = BindError;

    fn bind_i64(&mut self, position: usize, value: i64) -> Result<(), Self::Error> {
        self.slots.bind_i64(position, value)
    }

    fn bind_bytes(&mut self, position: usize, value: &[u8]) -> Result<(), Self::Error> {
        self.slots.bind_bytes(position, value)
    }
}
