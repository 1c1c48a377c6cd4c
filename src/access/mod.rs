pub mod cross_tenant;
pub mod resource;

pub use cross_tenant::{validate_cross_tenant_access, RelationshipType, ResourceContext};
pub use resource::can_access_resource;
