//! The `common` crate provides the building blocks shared by the certificate
//! role services: the [`RoleEntry`] configuration model with its validation
//! rules and the key-value [`Storage`] boundary role entries are persisted
//! through.
//!
//! [`RoleEntry`]: api::models::role::RoleEntry
//! [`Storage`]: storage::Storage

pub mod api;
mod error;
pub mod healthcheck;
pub mod storage;
pub mod time;
pub mod tracing;

pub use error::Error;
