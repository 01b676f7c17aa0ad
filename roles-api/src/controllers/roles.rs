use axum::{
    extract::{Path, State},
    Json,
};
use common::api::{
    forms::upsert_role::UpsertRoleBody,
    models::{role::RoleView, role_name::RoleName},
};

use crate::{error::AppError, role_repository::RoleRepository};

// Role names arrive as raw path segments; anything the RoleName newtype
// rejects is reported the same way as a missing name
fn parse_role_name(name: &str) -> Result<RoleName, AppError> {
    RoleName::new(name).map_err(|_| AppError::MissingRoleName)
}

pub async fn list_roles(
    State(role_repository): State<RoleRepository>,
) -> Result<Json<Vec<String>>, AppError> {
    let names = role_repository.list_roles().await?;

    Ok(Json(names))
}

pub async fn get_role(
    State(role_repository): State<RoleRepository>,
    Path(name): Path<String>,
) -> Result<Json<RoleView>, AppError> {
    let name = parse_role_name(&name)?;

    let view = role_repository.read_role(&name).await?;

    Ok(Json(view))
}

pub async fn upsert_role(
    State(role_repository): State<RoleRepository>,
    Path(name): Path<String>,
    Json(body): Json<UpsertRoleBody>,
) -> Result<(), AppError> {
    let name = parse_role_name(&name)?;

    role_repository.create_role(&name, body.into_entry()).await
}

pub async fn delete_role(
    State(role_repository): State<RoleRepository>,
    Path(name): Path<String>,
) -> Result<(), AppError> {
    let name = parse_role_name(&name)?;

    role_repository.delete_role(&name).await
}
