//! Profile output records.

use std::fmt;

use serde::Serialize;

use crate::catalog::{ColumnDescriptor, TypeTag};

/// Dataset-wide snapshot: row count plus per-column null and distinct counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetMetadata {
    pub table_name: String,
    pub row_count: u64,
    pub columns: Vec<ColumnStat>,
}

impl DatasetMetadata {
    /// Look up a column by exact name.
    pub fn column(&self, name: &str) -> Option<&ColumnStat> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Per-column counts within [`DatasetMetadata`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnStat {
    pub name: String,
    pub declared_type: TypeTag,
    pub native_type: String,
    pub null_count: u64,
    pub distinct_count: u64,
}

impl ColumnStat {
    pub fn new(descriptor: ColumnDescriptor, null_count: u64, distinct_count: u64) -> Self {
        Self {
            name: descriptor.name,
            declared_type: descriptor.declared_type,
            native_type: descriptor.native_type,
            null_count,
            distinct_count,
        }
    }
}

/// A MIN or MAX, typed after the column it came from.
///
/// Integers are held at 128 bits so every engine integer type fits;
/// `Unsigned` only carries UHUGEINT extremes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NumericValue {
    Integer(i128),
    Unsigned(u128),
    Float(f64),
}

impl NumericValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            NumericValue::Integer(n) => n as f64,
            NumericValue::Unsigned(n) => n as f64,
            NumericValue::Float(f) => f,
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Integer(n) => write!(f, "{}", n),
            NumericValue::Unsigned(n) => write!(f, "{}", n),
            NumericValue::Float(x) => write!(f, "{}", x),
        }
    }
}

/// On-demand statistics for a single column.
///
/// The numeric fields are only present for integer and float columns with at
/// least one non-null value; `stddev` additionally needs two. A float column
/// holding infinities or NaN gets the IEEE mean of its values (`inf`, `-inf`
/// or NaN) and a NaN stddev.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub declared_type: TypeTag,
    pub native_type: String,
    pub row_count: u64,
    pub null_count: u64,
    pub distinct_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<NumericValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<NumericValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stddev: Option<f64>,
}

impl ColumnSummary {
    pub fn non_null_count(&self) -> u64 {
        self.row_count - self.null_count
    }
}
