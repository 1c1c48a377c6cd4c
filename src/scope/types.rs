use serde::{Deserialize, Serialize};

/// How narrowly a data-access filter restricts visible rows.
///
/// There is no total order between levels; each one maps to its own
/// filter-construction rule in `build_filter`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityLevel {
    /// No tenant restriction. Only for data explicitly marked shareable
    /// across tenants, e.g. public menus.
    Public,
    #[default]
    Tenant,
    Business,
    Department,
    User,
    Admin,
}

impl SecurityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityLevel::Public => "public",
            SecurityLevel::Tenant => "tenant",
            SecurityLevel::Business => "business",
            SecurityLevel::Department => "department",
            SecurityLevel::User => "user",
            SecurityLevel::Admin => "admin",
        }
    }
}

impl std::fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Principal role carried on every request context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Staff,
    Guest,
    /// Cross-tenant operator role. The only role that bypasses tenant
    /// scoping in the access checks.
    PlatformAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Staff => "staff",
            Role::Guest => "guest",
            Role::PlatformAdmin => "platform_admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
