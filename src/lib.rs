pub mod access;
pub mod audit;
pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod query;
pub mod scope;
