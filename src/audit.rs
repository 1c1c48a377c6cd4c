use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;
use crate::scope::{ScopeContext, ScopeFilter};

/// Who ran a scoped query, for which tenant, and when. Attached to every
/// `SecureQuery` so the caller can persist it next to the query result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditStamp {
    pub event_id: Uuid,
    pub queried_by: String,
    pub tenant_id: String,
    pub timestamp: DateTime<Utc>,
}

impl AuditStamp {
    pub fn new(context: &ScopeContext) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            queried_by: context.user_id.clone(),
            tenant_id: context.tenant_id.clone(),
            timestamp: Utc::now(),
        }
    }
}

/// Emits the structured audit record for a scoped query. The active
/// `tracing` subscriber decides where these land; gated by
/// `security.enable_audit_logging`.
pub fn emit_query(context: &ScopeContext, table: &str, scope: &ScopeFilter) {
    if !config::config().security.enable_audit_logging {
        return;
    }

    let filters = serde_json::Value::Object(scope.to_json());
    tracing::info!(
        target: "buffr_tenancy::audit",
        queried_by = %context.user_id,
        tenant_id = %context.tenant_id,
        security_level = scope.level().as_str(),
        table,
        %filters,
        "scoped query"
    );
}
