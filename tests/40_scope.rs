use buffr_tenancy::scope::{build_filter, Role, ScopeContext, ScopeError, ScopeFilter, SecurityLevel};

// These tests cover the filter-construction rules, one per security level.
// Context fixtures use the Etuna demo property that ships with the platform.

fn manager_context() -> ScopeContext {
    ScopeContext::new("tenant-etuna", "user-maria", Role::Manager)
        .with_business("etuna-guesthouse")
        .with_department("housekeeping")
}

#[test]
fn public_level_has_no_restriction() {
    let ctx = manager_context();
    let filter = build_filter(&ctx, SecurityLevel::Public).unwrap();

    assert_eq!(filter, ScopeFilter::Public);
    assert!(filter.is_empty());
    assert!(filter.to_json().is_empty());
}

#[test]
fn tenant_level_pins_tenant_id() {
    let ctx = manager_context();
    let filter = build_filter(&ctx, SecurityLevel::Tenant).unwrap();

    assert_eq!(filter.columns(), vec![("tenant_id", "tenant-etuna")]);
}

#[test]
fn every_non_public_level_carries_the_context_tenant() {
    let ctx = manager_context();
    let levels = [
        SecurityLevel::Tenant,
        SecurityLevel::Business,
        SecurityLevel::Department,
        SecurityLevel::User,
        SecurityLevel::Admin,
    ];

    for level in levels {
        let filter = build_filter(&ctx, level).unwrap();
        assert_eq!(
            filter.tenant_id(),
            Some("tenant-etuna"),
            "level {level:?} lost the tenant pin"
        );
    }
}

#[test]
fn business_level_requires_business_id() {
    let ctx = ScopeContext::new("tenant-etuna", "user-maria", Role::Manager);
    let err = build_filter(&ctx, SecurityLevel::Business).unwrap_err();

    assert_eq!(
        err,
        ScopeError::MissingContext {
            level: SecurityLevel::Business,
            field: "business_id",
        }
    );
}

#[test]
fn business_level_includes_business_and_tenant() {
    let ctx = manager_context();
    let filter = build_filter(&ctx, SecurityLevel::Business).unwrap();

    assert_eq!(
        filter.columns(),
        vec![
            ("business_id", "etuna-guesthouse"),
            ("tenant_id", "tenant-etuna"),
        ]
    );
}

#[test]
fn department_level_requires_department_id() {
    // business present, department missing
    let ctx = ScopeContext::new("tenant-etuna", "user-maria", Role::Manager)
        .with_business("etuna-guesthouse");
    let err = build_filter(&ctx, SecurityLevel::Department).unwrap_err();

    assert_eq!(
        err,
        ScopeError::MissingContext {
            level: SecurityLevel::Department,
            field: "department_id",
        }
    );
}

#[test]
fn department_level_requires_business_id_too() {
    let ctx = ScopeContext::new("tenant-etuna", "user-maria", Role::Manager)
        .with_department("housekeeping");
    assert!(build_filter(&ctx, SecurityLevel::Department).is_err());
}

#[test]
fn department_level_includes_all_three_columns() {
    let ctx = manager_context();
    let filter = build_filter(&ctx, SecurityLevel::Department).unwrap();

    assert_eq!(
        filter.columns(),
        vec![
            ("department_id", "housekeeping"),
            ("business_id", "etuna-guesthouse"),
            ("tenant_id", "tenant-etuna"),
        ]
    );
}

#[test]
fn user_level_pins_user_and_tenant() {
    let ctx = ScopeContext::new("tenant-etuna", "user-guest-7", Role::Guest);
    let filter = build_filter(&ctx, SecurityLevel::User).unwrap();

    assert_eq!(
        filter.columns(),
        vec![("user_id", "user-guest-7"), ("tenant_id", "tenant-etuna")]
    );
}

#[test]
fn admin_level_is_still_tenant_scoped() {
    let ctx = ScopeContext::new("tenant-etuna", "user-ops", Role::PlatformAdmin);
    let filter = build_filter(&ctx, SecurityLevel::Admin).unwrap();

    assert_eq!(filter.columns(), vec![("tenant_id", "tenant-etuna")]);
}

#[test]
fn build_filter_is_idempotent_and_leaves_context_untouched() {
    let ctx = manager_context();
    let before = ctx.clone();

    let first = build_filter(&ctx, SecurityLevel::Business).unwrap();
    let second = build_filter(&ctx, SecurityLevel::Business).unwrap();

    assert_eq!(first, second);
    assert_eq!(ctx.tenant_id, before.tenant_id);
    assert_eq!(ctx.business_id, before.business_id);
    assert_eq!(ctx.department_id, before.department_id);
}

#[test]
fn default_level_is_tenant() {
    assert_eq!(SecurityLevel::default(), SecurityLevel::Tenant);
}
