use serde::{Deserialize, Serialize};

use super::types::Role;

/// Caller identity and scoping fields for one request.
///
/// Supplied per request (normally by the auth middleware) and never mutated
/// by this crate. `business_id`/`department_id` are present only when the
/// principal is pinned to a sub-unit of the tenant; `service_id` and
/// `service_type` carry service-scoped sessions (spa, shuttle, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeContext {
    pub tenant_id: String,
    pub user_id: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}

impl ScopeContext {
    pub fn new(tenant_id: impl Into<String>, user_id: impl Into<String>, role: Role) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            user_id: user_id.into(),
            role,
            business_id: None,
            department_id: None,
            service_id: None,
            service_type: None,
        }
    }

    pub fn with_business(mut self, business_id: impl Into<String>) -> Self {
        self.business_id = Some(business_id.into());
        self
    }

    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }

    pub fn with_service(
        mut self,
        service_id: impl Into<String>,
        service_type: impl Into<String>,
    ) -> Self {
        self.service_id = Some(service_id.into());
        self.service_type = Some(service_type.into());
        self
    }

    pub fn is_platform_admin(&self) -> bool {
        self.role == Role::PlatformAdmin
    }
}
