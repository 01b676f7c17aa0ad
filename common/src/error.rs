use std::io;

use thiserror::Error;

/// Faults raised below the role registry: the storage engine and the
/// serialization of persisted records. Rejected role configurations are not
/// represented here, they are user errors carried by
/// [`RoleValidationError`](crate::api::models::role::RoleValidationError).
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    IO(#[from] io::Error),
    #[error("Error while serializing JSON")]
    JsonSerialization(#[from] serde_json::Error),
    #[error("Role name is invalid")]
    InvalidRoleName,
}
