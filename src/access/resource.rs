use crate::scope::ScopeContext;

/// Decides whether the caller may view a specific resource.
///
/// Never errors: any ambiguous or partially-specified input resolves to
/// deny, and callers translate `false` into a 403/404. Checks run in order,
/// first match wins:
///
/// 1. platform admins bypass tenant scoping entirely
/// 2. cross-tenant access is denied for everyone else
/// 3. when both sides carry a business id, they must match
/// 4. when the resource is user-owned, the owner must be the caller
/// 5. otherwise same-tenant access is allowed
pub fn can_access_resource(
    context: &ScopeContext,
    resource_tenant_id: &str,
    resource_business_id: Option<&str>,
    resource_user_id: Option<&str>,
) -> bool {
    if context.is_platform_admin() {
        return true;
    }

    if context.tenant_id != resource_tenant_id {
        return false;
    }

    if let (Some(resource_business), Some(own_business)) =
        (resource_business_id, context.business_id.as_deref())
    {
        return resource_business == own_business;
    }

    if let Some(owner) = resource_user_id {
        return owner == context.user_id;
    }

    // Same tenant, no finer-grained scoping requested.
    true
}
