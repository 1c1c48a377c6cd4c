pub mod context;
pub mod error;
pub mod filter;
pub mod types;

pub use context::ScopeContext;
pub use error::ScopeError;
pub use filter::{build_filter, ScopeFilter};
pub use types::{Role, SecurityLevel};
