use crate::sql::base::{
    error::BindError,
    params::{BoundParam, ParamSlots},
};
use model::pagination::binder::StatementBinder;
use tokio_postgres::Statement;
use tokio_postgres::types::ToSql;

/// A bound value as a `BIGINT` or `BYTEA` parameter.
pub struct PgParam(Box<dyn ToSql + Sync + Send>);

impl PgParam {
    pub fn from_bound(value: &BoundParam) -> Self {
        match value {
            BoundParam::Int(v) => PgParam(Box::new(*v)),
            BoundParam::Bytes(v) => PgParam(Box::new(v.clone())),
        }
    }
}

impl AsRef<dyn ToSql + Sync> for PgParam {
    fn as_ref(&self) -> &(dyn ToSql + Sync + 'static) {
        &*self.0
    }
}

/// Owned parameters ready to pass to `Client::query`.
pub struct PgParamStore {
    pub params: Vec<PgParam>,
}

impl PgParamStore {
    pub fn from_bound(values: &[&BoundParam]) -> Self {
        Self {
            params: values.iter().map(|v| PgParam::from_bound(v)).collect(),
        }
    }

    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|param| param.as_ref())
            .collect::<Vec<_>>()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Bind target for a prepared PostgreSQL statement (`$1`, `$2`, ...).
#[derive(Debug, Clone)]
pub struct PgStatementParams {
    slots: ParamSlots,
}

impl PgStatementParams {
    pub fn new(count: usize) -> Self {
        Self {
            slots: ParamSlots::new(count),
        }
    }

    /// Sizes the slots from the statement's declared parameter types.
    pub fn for_statement(statement: &Statement) -> Self {
        Self::new(statement.params().len())
    }

    pub fn slots(&self) -> &ParamSlots {
        &self.slots
    }

    pub fn close(&mut self) {
        self.slots.close();
    }

    /// Converts the bound values; fails if any position is still unbound.
    pub fn to_store(&self) -> Result<PgParamStore, BindError> {
        let values = self.slots.values()?;
        Ok(PgParamStore::from_bound(&values))
    }
}

impl StatementBinder for PgStatementParams {
    type Error = BindError;

    fn bind_i64(&mut self, position: usize, value: i64) -> Result<(), Self::Error> {
        self.slots.bind_i64(position, value)
    }

    fn bind_bytes(&mut self, position: usize, value: &[u8]) -> Result<(), Self::Error> {
        self.slots.bind_bytes(position, value)
    }
}
