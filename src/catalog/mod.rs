//! Relation introspection and column type classification.
//!
//! Column names and engine types come from `information_schema.columns`. The
//! table name is bound as a parameter, never spliced into the statement.

use std::fmt;

use duckdb::params;
use serde::Serialize;
use tracing::debug;

use crate::engine::Session;
use crate::error::ProfileResult;
use crate::sql::dialect::Dialect;
use crate::sql::expr::{col, func, param, ExprExt};
use crate::sql::query::{OrderByExpr, Query, TableRef};
use crate::sql::types::DataType;

/// Normalized classification of an engine column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Integer,
    Float,
    Boolean,
    String,
    Temporal,
    Other,
}

impl TypeTag {
    /// Classify an engine type name such as `BIGINT` or `DECIMAL(10,2)`.
    pub fn classify(native_type: &str) -> Self {
        match DataType::parse(native_type) {
            Some(dt) => Self::from_data_type(&dt),
            None => TypeTag::Other,
        }
    }

    pub fn from_data_type(dt: &DataType) -> Self {
        if dt.is_integer() {
            TypeTag::Integer
        } else if dt.is_numeric() {
            TypeTag::Float
        } else if dt.is_string() {
            TypeTag::String
        } else if dt.is_temporal() {
            TypeTag::Temporal
        } else if *dt == DataType::Bool {
            TypeTag::Boolean
        } else {
            TypeTag::Other
        }
    }

    /// Whether MIN/MAX/AVG/STDDEV are computed for columns of this type.
    pub fn supports_numeric_aggregates(&self) -> bool {
        match self {
            TypeTag::Integer | TypeTag::Float => true,
            TypeTag::Boolean
            | TypeTag::String
            | TypeTag::Temporal
            | TypeTag::Other => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Integer => "integer",
            TypeTag::Float => "float",
            TypeTag::Boolean => "boolean",
            TypeTag::String => "string",
            TypeTag::Temporal => "temporal",
            TypeTag::Other => "other",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One column of a relation, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub declared_type: TypeTag,
    /// Type name exactly as the engine reports it.
    pub native_type: String,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, native_type: impl Into<String>) -> Self {
        let native_type = native_type.into();
        Self {
            name: name.into(),
            declared_type: TypeTag::classify(&native_type),
            native_type,
        }
    }

    /// Type MIN/MAX are read back as, `None` when the column gets no
    /// numeric aggregates.
    ///
    /// Integers widen to HUGEINT so UBIGINT and HUGEINT extremes survive;
    /// UHUGEINT stays unsigned.
    pub fn extreme_type(&self) -> Option<DataType> {
        match self.declared_type {
            TypeTag::Integer => match DataType::parse(&self.native_type) {
                Some(DataType::UInt128) => Some(DataType::UInt128),
                _ => Some(DataType::Int128),
            },
            TypeTag::Float => Some(DataType::Float64),
            TypeTag::Boolean | TypeTag::String | TypeTag::Temporal | TypeTag::Other => None,
        }
    }
}

/// Catalog lookup for the columns of `table` in the current schema.
pub fn columns_query() -> Query {
    Query::new()
        .select(vec![col("column_name"), col("data_type")])
        .from(TableRef::new("columns").with_schema("information_schema"))
        .filter(col("table_name").eq(param()))
        .filter(col("table_schema").eq(func("current_schema", vec![])))
        .filter(col("table_catalog").eq(func("current_database", vec![])))
        .order_by(vec![OrderByExpr::new(col("ordinal_position"))])
}

/// Zero-row probe that fails with the engine's own error if `table` is absent.
pub fn probe_query(table: &str) -> Query {
    Query::new().select_star().from(TableRef::new(table)).limit(0)
}

/// Describe the columns of `table`, in declaration order.
///
/// A table the catalog doesn't know is probed directly so that the engine's
/// "does not exist" error is what the caller sees.
pub fn describe(session: &Session, table: &str) -> ProfileResult<Vec<ColumnDescriptor>> {
    let sql = columns_query().to_sql(Dialect::DuckDb);
    let columns = session.query(&sql, params![table], |row| {
        Ok(ColumnDescriptor::new(
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
        ))
    })?;

    if columns.is_empty() {
        let probe = probe_query(table).to_sql(Dialect::DuckDb);
        session.query(&probe, [], |_| Ok(()))?;
    }

    debug!(table, columns = columns.len(), "described relation");
    Ok(columns)
}
