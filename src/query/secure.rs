use serde_json::{Map, Value};

use crate::audit::{self, AuditStamp};
use crate::config;
use crate::scope::{build_filter, ScopeContext, ScopeFilter, SecurityLevel};

use super::error::QueryError;
use super::types::SqlResult;

/// A tenant-scoped query description: target table, scope filter, caller
/// equality predicates, and the audit stamp recorded for the caller.
///
/// This never executes anything; callers hand `to_sql()` output to their
/// database driver.
#[derive(Debug, Clone)]
pub struct SecureQuery {
    table: String,
    scope: ScopeFilter,
    additional: Map<String, Value>,
    audit: AuditStamp,
}

/// Combines `build_filter` with caller-supplied equality filters. The
/// security level defaults to `Tenant` when unspecified.
pub fn create_secure_query(
    context: &ScopeContext,
    table: impl Into<String>,
    additional_filters: Option<Map<String, Value>>,
    level: Option<SecurityLevel>,
) -> Result<SecureQuery, QueryError> {
    let table = table.into();
    validate_table_name(&table)?;

    let additional = additional_filters.unwrap_or_default();
    let max_filters = config::config().query.max_additional_filters;
    if additional.len() > max_filters {
        return Err(QueryError::TooManyFilters {
            count: additional.len(),
            max: max_filters,
        });
    }
    for column in additional.keys() {
        validate_column_name(column)?;
    }

    let level = level.unwrap_or_default();
    let scope = build_filter(context, level)?;

    if config::config().query.debug_logging {
        tracing::debug!(table = %table, level = %level, "building secure query");
    }
    audit::emit_query(context, &table, &scope);

    Ok(SecureQuery {
        table,
        scope,
        additional,
        audit: AuditStamp::new(context),
    })
}

impl SecureQuery {
    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn scope(&self) -> &ScopeFilter {
        &self.scope
    }

    pub fn audit(&self) -> &AuditStamp {
        &self.audit
    }

    /// Merged filter map handed to query builders that take key/value
    /// predicates. Scope columns win on key collision: a caller cannot
    /// widen visibility by passing its own `tenant_id`.
    pub fn filters(&self) -> Map<String, Value> {
        let mut merged = self.additional.clone();
        for (column, value) in self.scope.columns() {
            merged.insert(column.to_string(), Value::String(value.to_string()));
        }
        merged
    }

    pub fn to_sql(&self) -> SqlResult {
        let (where_clause, params) = self.build_where();
        let query = if where_clause.is_empty() {
            format!("SELECT * FROM \"{}\"", self.table)
        } else {
            format!("SELECT * FROM \"{}\" WHERE {}", self.table, where_clause)
        };
        SqlResult { query, params }
    }

    pub fn to_count_sql(&self) -> SqlResult {
        let (where_clause, params) = self.build_where();
        let query = if where_clause.is_empty() {
            format!("SELECT COUNT(*) as count FROM \"{}\"", self.table)
        } else {
            format!(
                "SELECT COUNT(*) as count FROM \"{}\" WHERE {}",
                self.table, where_clause
            )
        };
        SqlResult { query, params }
    }

    /// Scope columns first, then caller predicates. Caller predicates on a
    /// column the scope already pins are dropped rather than doubled.
    fn build_where(&self) -> (String, Vec<Value>) {
        let scope_columns = self.scope.columns();
        let mut conditions = vec![];
        let mut params: Vec<Value> = vec![];

        for (column, value) in &scope_columns {
            params.push(Value::String((*value).to_string()));
            conditions.push(format!("\"{}\" = ${}", column, params.len()));
        }

        for (column, value) in &self.additional {
            if scope_columns.iter().any(|(scoped, _)| *scoped == column.as_str()) {
                continue;
            }
            params.push(value.clone());
            conditions.push(format!("\"{}\" = ${}", column, params.len()));
        }

        (conditions.join(" AND "), params)
    }
}

fn validate_table_name(name: &str) -> Result<(), QueryError> {
    validate_identifier(name).map_err(|_| QueryError::InvalidTableName(name.to_string()))
}

fn validate_column_name(name: &str) -> Result<(), QueryError> {
    validate_identifier(name).map_err(|_| QueryError::InvalidColumn(name.to_string()))
}

fn validate_identifier(name: &str) -> Result<(), ()> {
    if name.is_empty() || name.len() > config::config().query.max_identifier_len {
        return Err(());
    }
    let mut chars = name.chars();
    let first = chars.next().ok_or(())?;
    if !first.is_alphabetic() && first != '_' {
        return Err(());
    }
    if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(());
    }
    Ok(())
}
