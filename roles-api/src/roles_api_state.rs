use axum::extract::FromRef;

use crate::role_repository::RoleRepository;

#[derive(Clone, FromRef)]
pub struct RolesApiState {
    pub role_repository: RoleRepository,
}

impl RolesApiState {
    pub fn new(role_repository: RoleRepository) -> Self {
        Self { role_repository }
    }
}
