//! Engine-level data types.
//!
//! `DataType` models the scalar column types DuckDB reports through
//! `information_schema.columns.data_type`, and doubles as the target type of
//! `CAST` expressions. Nested types (LIST, STRUCT, MAP, UNION, ENUM, fixed-size
//! arrays) are deliberately not modelled: [`DataType::parse`] returns `None` for
//! them and callers treat that as "some other type".

use std::fmt;

/// A scalar DuckDB column type.
///
/// # Examples
///
/// ```
/// use looksee::sql::types::DataType;
///
/// assert_eq!(DataType::parse("BIGINT"), Some(DataType::Int64));
/// assert_eq!(DataType::parse("DECIMAL(10,2)"), Some(DataType::Decimal(10, 2)));
/// assert_eq!(DataType::parse("INTEGER[]"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    /// BOOLEAN.
    Bool,

    /// TINYINT.
    Int8,

    /// SMALLINT.
    Int16,

    /// INTEGER.
    Int32,

    /// BIGINT.
    Int64,

    /// HUGEINT.
    Int128,

    /// UTINYINT.
    UInt8,

    /// USMALLINT.
    UInt16,

    /// UINTEGER.
    UInt32,

    /// UBIGINT.
    UInt64,

    /// UHUGEINT.
    UInt128,

    /// FLOAT (single precision).
    Float32,

    /// DOUBLE.
    Float64,

    /// Fixed-precision decimal with precision and scale.
    Decimal(u8, u8),

    /// VARCHAR and its aliases.
    String,

    /// DATE.
    Date,

    /// TIME.
    Time,

    /// TIME WITH TIME ZONE.
    TimeTz,

    /// TIMESTAMP in any of its precisions (s, ms, us, ns).
    Timestamp,

    /// TIMESTAMP WITH TIME ZONE.
    TimestampTz,

    /// INTERVAL.
    Interval,

    /// BLOB.
    Binary,

    /// JSON.
    Json,

    /// UUID.
    Uuid,
}

impl DataType {
    /// Parse a DuckDB type name as reported by the catalog.
    ///
    /// Matching is case-insensitive and tolerant of surrounding whitespace.
    /// Returns `None` for nested or unknown types.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();

        // LIST (`INTEGER[]`) and ARRAY (`INTEGER[3]`) types
        if s.ends_with(']') {
            return None;
        }

        if let Some(inner) = extract_parens(&s, "decimal").or_else(|| extract_parens(&s, "numeric"))
        {
            return parse_decimal_params(&inner);
        }

        // VARCHAR(n) carries no semantic difference in DuckDB
        if extract_parens(&s, "varchar").is_some() || extract_parens(&s, "char").is_some() {
            return Some(DataType::String);
        }

        match s.as_str() {
            "boolean" | "bool" | "logical" => Some(DataType::Bool),

            "tinyint" | "int1" => Some(DataType::Int8),
            "smallint" | "int2" | "short" => Some(DataType::Int16),
            "integer" | "int" | "int4" | "signed" => Some(DataType::Int32),
            "bigint" | "int8" | "long" => Some(DataType::Int64),
            "hugeint" | "int128" => Some(DataType::Int128),
            "utinyint" => Some(DataType::UInt8),
            "usmallint" => Some(DataType::UInt16),
            "uinteger" => Some(DataType::UInt32),
            "ubigint" => Some(DataType::UInt64),
            "uhugeint" => Some(DataType::UInt128),

            "float" | "float4" | "real" => Some(DataType::Float32),
            "double" | "float8" | "double precision" => Some(DataType::Float64),

            // DuckDB's default precision for an unparameterized DECIMAL
            "decimal" | "numeric" => Some(DataType::Decimal(18, 3)),

            "varchar" | "text" | "string" | "char" | "bpchar" | "nvarchar"
            | "character varying" => Some(DataType::String),

            "date" => Some(DataType::Date),
            "time" => Some(DataType::Time),
            "time with time zone" | "timetz" => Some(DataType::TimeTz),
            "timestamp" | "datetime" | "timestamp_s" | "timestamp_ms" | "timestamp_us"
            | "timestamp_ns" => Some(DataType::Timestamp),
            "timestamp with time zone" | "timestamptz" => Some(DataType::TimestampTz),
            "interval" => Some(DataType::Interval),

            "blob" | "bytea" | "binary" | "varbinary" => Some(DataType::Binary),
            "json" => Some(DataType::Json),
            "uuid" => Some(DataType::Uuid),

            _ => None,
        }
    }

    /// Returns true if this is a numeric type (integers, floats, decimals).
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || matches!(self, DataType::Float32 | DataType::Float64 | DataType::Decimal(_, _))
    }

    /// Returns true if this is an integer type, signed or unsigned.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::Int128
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
                | DataType::UInt128
        )
    }

    /// Returns true if this is a string type.
    pub fn is_string(&self) -> bool {
        matches!(self, DataType::String)
    }

    /// Returns true if this is a date, time or timestamp type.
    ///
    /// INTERVAL is a duration, not a point in time, and is excluded.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            DataType::Date
                | DataType::Time
                | DataType::TimeTz
                | DataType::Timestamp
                | DataType::TimestampTz
        )
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Bool => write!(f, "BOOLEAN"),
            DataType::Int8 => write!(f, "TINYINT"),
            DataType::Int16 => write!(f, "SMALLINT"),
            DataType::Int32 => write!(f, "INTEGER"),
            DataType::Int64 => write!(f, "BIGINT"),
            DataType::Int128 => write!(f, "HUGEINT"),
            DataType::UInt8 => write!(f, "UTINYINT"),
            DataType::UInt16 => write!(f, "USMALLINT"),
            DataType::UInt32 => write!(f, "UINTEGER"),
            DataType::UInt64 => write!(f, "UBIGINT"),
            DataType::UInt128 => write!(f, "UHUGEINT"),
            DataType::Float32 => write!(f, "FLOAT"),
            DataType::Float64 => write!(f, "DOUBLE"),
            DataType::Decimal(p, s) => write!(f, "DECIMAL({}, {})", p, s),
            DataType::String => write!(f, "VARCHAR"),
            DataType::Date => write!(f, "DATE"),
            DataType::Time => write!(f, "TIME"),
            DataType::TimeTz => write!(f, "TIME WITH TIME ZONE"),
            DataType::Timestamp => write!(f, "TIMESTAMP"),
            DataType::TimestampTz => write!(f, "TIMESTAMP WITH TIME ZONE"),
            DataType::Interval => write!(f, "INTERVAL"),
            DataType::Binary => write!(f, "BLOB"),
            DataType::Json => write!(f, "JSON"),
            DataType::Uuid => write!(f, "UUID"),
        }
    }
}

/// Extract content inside parentheses for a given type prefix.
/// e.g., extract_parens("decimal(10,2)", "decimal") returns Some("10,2")
fn extract_parens(s: &str, prefix: &str) -> Option<String> {
    let s = s.trim();
    if !s.starts_with(prefix) {
        return None;
    }

    let rest = s[prefix.len()..].trim();
    if !rest.starts_with('(') || !rest.ends_with(')') {
        return None;
    }

    Some(rest[1..rest.len() - 1].to_string())
}

/// Parse decimal parameters "precision,scale" or "precision, scale".
fn parse_decimal_params(inner: &str) -> Option<DataType> {
    let parts: Vec<&str> = inner.split(',').map(|s| s.trim()).collect();
    match parts.as_slice() {
        [precision] => Some(DataType::Decimal(precision.parse().ok()?, 0)),
        [precision, scale] => Some(DataType::Decimal(
            precision.parse().ok()?,
            scale.parse().ok()?,
        )),
        _ => None,
    }
}
