use serde_json::{Map, Value};

use super::context::ScopeContext;
use super::error::ScopeError;
use super::types::SecurityLevel;

/// Row-visibility filter produced for one request.
///
/// One variant per security level; each variant carries exactly the columns
/// that level restricts on, so a filter missing its tenant pin cannot be
/// constructed. Transient: built fresh per call, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeFilter {
    Public,
    Tenant {
        tenant_id: String,
    },
    Business {
        business_id: String,
        tenant_id: String,
    },
    Department {
        department_id: String,
        business_id: String,
        tenant_id: String,
    },
    User {
        user_id: String,
        tenant_id: String,
    },
    Admin {
        tenant_id: String,
    },
}

/// Maps a caller context and requested security level to the filter merged
/// into the subsequent data query. Pure: the context is never mutated, and
/// identical inputs always yield identical filters.
pub fn build_filter(
    context: &ScopeContext,
    level: SecurityLevel,
) -> Result<ScopeFilter, ScopeError> {
    let filter = match level {
        SecurityLevel::Public => ScopeFilter::Public,
        SecurityLevel::Tenant => ScopeFilter::Tenant {
            tenant_id: context.tenant_id.clone(),
        },
        SecurityLevel::Business => ScopeFilter::Business {
            business_id: require(context.business_id.as_deref(), level, "business_id")?,
            tenant_id: context.tenant_id.clone(),
        },
        SecurityLevel::Department => ScopeFilter::Department {
            department_id: require(context.department_id.as_deref(), level, "department_id")?,
            business_id: require(context.business_id.as_deref(), level, "business_id")?,
            tenant_id: context.tenant_id.clone(),
        },
        SecurityLevel::User => ScopeFilter::User {
            user_id: context.user_id.clone(),
            tenant_id: context.tenant_id.clone(),
        },
        // Platform admins still get a tenant-scoped filter for the audit
        // trail; the bypass lives in the access checks, not here.
        SecurityLevel::Admin => ScopeFilter::Admin {
            tenant_id: context.tenant_id.clone(),
        },
    };
    Ok(filter)
}

fn require(
    value: Option<&str>,
    level: SecurityLevel,
    field: &'static str,
) -> Result<String, ScopeError> {
    value
        .map(str::to_string)
        .ok_or(ScopeError::MissingContext { level, field })
}

impl ScopeFilter {
    pub fn level(&self) -> SecurityLevel {
        match self {
            ScopeFilter::Public => SecurityLevel::Public,
            ScopeFilter::Tenant { .. } => SecurityLevel::Tenant,
            ScopeFilter::Business { .. } => SecurityLevel::Business,
            ScopeFilter::Department { .. } => SecurityLevel::Department,
            ScopeFilter::User { .. } => SecurityLevel::User,
            ScopeFilter::Admin { .. } => SecurityLevel::Admin,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ScopeFilter::Public)
    }

    pub fn tenant_id(&self) -> Option<&str> {
        match self {
            ScopeFilter::Public => None,
            ScopeFilter::Tenant { tenant_id }
            | ScopeFilter::Business { tenant_id, .. }
            | ScopeFilter::Department { tenant_id, .. }
            | ScopeFilter::User { tenant_id, .. }
            | ScopeFilter::Admin { tenant_id } => Some(tenant_id),
        }
    }

    /// Filter columns in the order they appear in a rendered WHERE clause.
    /// The narrowest column comes first, `tenant_id` last.
    pub fn columns(&self) -> Vec<(&'static str, &str)> {
        match self {
            ScopeFilter::Public => vec![],
            ScopeFilter::Tenant { tenant_id } => vec![("tenant_id", tenant_id.as_str())],
            ScopeFilter::Business {
                business_id,
                tenant_id,
            } => vec![
                ("business_id", business_id.as_str()),
                ("tenant_id", tenant_id.as_str()),
            ],
            ScopeFilter::Department {
                department_id,
                business_id,
                tenant_id,
            } => vec![
                ("department_id", department_id.as_str()),
                ("business_id", business_id.as_str()),
                ("tenant_id", tenant_id.as_str()),
            ],
            ScopeFilter::User { user_id, tenant_id } => vec![
                ("user_id", user_id.as_str()),
                ("tenant_id", tenant_id.as_str()),
            ],
            ScopeFilter::Admin { tenant_id } => vec![("tenant_id", tenant_id.as_str())],
        }
    }

    /// Key/value form for merging with caller-side query predicates.
    pub fn to_json(&self) -> Map<String, Value> {
        self.columns()
            .into_iter()
            .map(|(column, value)| (column.to_string(), Value::String(value.to_string())))
            .collect()
    }
}
