//! Shared helper functions for SQL dialect implementations.

use super::super::token::{Token, TokenStream};

// =============================================================================
// Identifier Quoting
// =============================================================================

/// Quote identifier with double quotes (ANSI style).
/// Used by: DuckDB
pub fn quote_double(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

// =============================================================================
// String Quoting
// =============================================================================

/// Quote string with single quotes (standard SQL).
pub fn quote_string_single(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

// =============================================================================
// Pagination
// =============================================================================

/// Emit LIMIT n (standard SQL).
pub fn emit_limit_standard(limit: u64) -> TokenStream {
    let mut ts = TokenStream::new();
    ts.push(Token::Limit)
        .space()
        .push(Token::LitInt(limit as i64));
    ts
}
