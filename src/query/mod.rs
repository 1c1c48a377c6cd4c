pub mod error;
pub mod secure;
pub mod types;

pub use error::QueryError;
pub use secure::{create_secure_query, SecureQuery};
pub use types::SqlResult;
