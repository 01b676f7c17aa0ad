use std::sync::Arc;

use common::{
    api::models::{
        role::{RoleEntry, RoleView},
        role_name::RoleName,
    },
    storage::Storage,
};

use crate::error::AppError;

const ROLE_PREFIX: &str = "role/";

/// CRUD operations over the persisted role entries.
///
/// Holds the storage handle as an explicit dependency; there is no
/// process-wide registry state. Operations on different role names are
/// independent; a create is a blind overwrite, so when two callers race on
/// one name the last writer wins.
#[derive(Clone)]
pub struct RoleRepository {
    storage: Arc<dyn Storage>,
}

impl RoleRepository {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    fn role_path(name: &RoleName) -> String {
        format!("{ROLE_PREFIX}{name}")
    }

    /// Validates and persists a role entry, replacing any previous entry of
    /// the same name wholesale. Nothing is written when validation fails.
    pub async fn create_role(&self, name: &RoleName, mut entry: RoleEntry) -> Result<(), AppError> {
        entry.validate()?;
        entry.migrate_deprecated_store_options();

        let bytes = serde_json::to_vec(&entry).map_err(common::Error::from)?;
        self.storage.put(&Self::role_path(name), &bytes).await?;

        tracing::debug!("Stored role '{}'", name);

        Ok(())
    }

    /// Returns the full stored entry for `name`, secrets included, or `None`
    /// when no such role exists.
    pub async fn get_role(&self, name: &RoleName) -> Result<Option<RoleEntry>, AppError> {
        let Some(bytes) = self.storage.get(&Self::role_path(name)).await? else {
            return Ok(None);
        };

        let entry = serde_json::from_slice(&bytes).map_err(common::Error::from)?;

        Ok(Some(entry))
    }

    /// The redacted read used by the management surface.
    pub async fn read_role(&self, name: &RoleName) -> Result<RoleView, AppError> {
        match self.get_role(name).await? {
            Some(entry) => Ok(entry.to_view()),
            None => Err(AppError::RoleNotFound),
        }
    }

    /// All role names, sorted. Entry bodies are not loaded.
    pub async fn list_roles(&self) -> Result<Vec<String>, AppError> {
        let names = self.storage.list(ROLE_PREFIX).await?;

        Ok(names)
    }

    /// Removes the entry for `name`. Deleting a role that does not exist is
    /// not an error.
    pub async fn delete_role(&self, name: &RoleName) -> Result<(), AppError> {
        self.storage.delete(&Self::role_path(name)).await?;

        Ok(())
    }
}
