pub mod auth;

pub use auth::scope_context_middleware;
