use serde::{Deserialize, Serialize};

use crate::scope::{Role, ScopeContext};

/// Kind of record that legitimately links a requester in one tenant to a
/// resource held by another, e.g. a guest's booking at a property outside
/// their home tenant.
///
/// Currently an audit tag only: the decision policy is uniform across
/// kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    Booking,
    Order,
    Review,
    Loyalty,
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Booking => "booking",
            RelationshipType::Order => "order",
            RelationshipType::Review => "review",
            RelationshipType::Loyalty => "loyalty",
        }
    }
}

/// Ownership coordinates of the resource being checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceContext {
    pub tenant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl ResourceContext {
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            business_id: None,
            user_id: None,
        }
    }

    pub fn with_business(mut self, business_id: impl Into<String>) -> Self {
        self.business_id = Some(business_id.into());
        self
    }

    pub fn with_owner(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// Access check for relationships that span tenants. Never errors;
/// fail-closed like [`can_access_resource`](crate::access::can_access_resource).
///
/// First match wins: platform admin; guest reaching their own record;
/// matching business; same tenant. Everything else is denied.
pub fn validate_cross_tenant_access(
    requester: &ScopeContext,
    resource: &ResourceContext,
    relationship: RelationshipType,
) -> bool {
    let allowed = decide(requester, resource);

    tracing::debug!(
        relationship = relationship.as_str(),
        requester_tenant = %requester.tenant_id,
        resource_tenant = %resource.tenant_id,
        allowed,
        "cross-tenant access check"
    );

    allowed
}

fn decide(requester: &ScopeContext, resource: &ResourceContext) -> bool {
    if requester.is_platform_admin() {
        return true;
    }

    // A guest may always reach records they own, wherever those records
    // live (their booking sits under the property's tenant, not theirs).
    if requester.role == Role::Guest {
        if let Some(owner) = resource.user_id.as_deref() {
            if owner == requester.user_id {
                return true;
            }
        }
    }

    if let (Some(own_business), Some(resource_business)) =
        (requester.business_id.as_deref(), resource.business_id.as_deref())
    {
        if own_business == resource_business {
            return true;
        }
    }

    requester.tenant_id == resource.tenant_id
}
