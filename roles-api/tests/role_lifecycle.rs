use std::sync::Arc;

use common::{
    api::{
        forms::upsert_role::UpsertRoleBody,
        models::{role::RoleValidationError, role_name::RoleName},
    },
    storage::InMemoryStorage,
};
use roles_api::{error::AppError, role_repository::RoleRepository};
use serde_json::json;

fn repository() -> RoleRepository {
    RoleRepository::new(Arc::new(InMemoryStorage::new()))
}

fn body(value: serde_json::Value) -> UpsertRoleBody {
    serde_json::from_value(value).expect("valid upsert body")
}

#[tokio::test]
async fn fakemode_role_round_trips_without_secrets() -> anyhow::Result<()> {
    let repository = repository();
    let name = RoleName::new("fake")?;

    let body = body(json!({
        "zone": "vault",
        "fakemode": true,
    }));

    repository.create_role(&name, body.into_entry()).await?;

    let view = repository.read_role(&name).await?;

    assert!(view.fakemode);
    assert_eq!(view.store_by, "");
    assert_eq!(view.zone, "vault");

    let view_json = serde_json::to_value(&view)?;
    assert!(view_json.get("tpp_password").is_none());
    assert!(view_json.get("apikey").is_none());

    Ok(())
}

#[tokio::test]
async fn tpp_role_read_matches_input_without_secret_fields() -> anyhow::Result<()> {
    let repository = repository();
    let name = RoleName::new("tpp-import")?;

    let body = body(json!({
        "zone": "testpolicy\\vault",
        "tpp_url": "https://tpp.example/vedsdk",
        "tpp_user": "admin",
        "tpp_password": "password",
        "trust_bundle_file": "/opt/venafi/bundle.pem",
        "ttl": 300,
        "max_ttl": 600,
        "generate_lease": true,
    }));

    repository.create_role(&name, body.into_entry()).await?;

    let view = repository.read_role(&name).await?;

    assert_eq!(view.tpp_url, "https://tpp.example/vedsdk");
    assert_eq!(view.tpp_user, "admin");
    assert_eq!(view.trust_bundle_file, "/opt/venafi/bundle.pem");
    assert_eq!(view.ttl, 300);
    assert_eq!(view.max_ttl, 600);
    assert!(view.generate_lease);
    assert_eq!(view.key_type, "rsa");
    assert_eq!(view.key_bits, 2048);

    Ok(())
}

#[tokio::test]
async fn mixed_tpp_and_cloud_credentials_are_rejected() -> anyhow::Result<()> {
    let repository = repository();
    let name = RoleName::new("mixed")?;

    let body = body(json!({
        "zone": "vault",
        "tpp_url": "https://tpp.example/vedsdk",
        "tpp_user": "admin",
        "tpp_password": "pw",
        "apikey": "abc",
    }));

    let err = repository
        .create_role(&name, body.into_entry())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::InvalidRole(RoleValidationError::MixedTppAndCloudCredentials)
    ));

    // A failed create writes nothing
    assert!(repository.get_role(&name).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn ttl_above_max_ttl_is_rejected() -> anyhow::Result<()> {
    let repository = repository();
    let name = RoleName::new("short-lived")?;

    let body = body(json!({
        "zone": "vault",
        "fakemode": true,
        "ttl": 100,
        "max_ttl": 50,
    }));

    let err = repository
        .create_role(&name, body.into_entry())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::InvalidRole(RoleValidationError::TtlExceedsMaxTtl)
    ));
    assert!(repository.get_role(&name).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn bogus_store_by_value_is_rejected_with_a_descriptive_message() -> anyhow::Result<()> {
    let repository = repository();
    let name = RoleName::new("bogus-store")?;

    let body = body(json!({
        "zone": "vault",
        "fakemode": true,
        "store_by": "bogus",
    }));

    let err = repository
        .create_role(&name, body.into_entry())
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("serial"));
    assert!(message.contains("cn"));
    assert!(message.contains("bogus"));

    assert!(repository.get_role(&name).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn no_store_conflicts_with_deprecated_store_flags() -> anyhow::Result<()> {
    let repository = repository();
    let name = RoleName::new("conflicted")?;

    let body = body(json!({
        "zone": "vault",
        "fakemode": true,
        "store_by_serial": true,
        "no_store": true,
    }));

    let err = repository
        .create_role(&name, body.into_entry())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::InvalidRole(RoleValidationError::NoStoreWithDeprecatedStoreOptions)
    ));

    Ok(())
}

#[tokio::test]
async fn deprecated_store_flags_migrate_onto_the_persisted_record() -> anyhow::Result<()> {
    let repository = repository();
    let name = RoleName::new("migrated")?;

    let body = body(json!({
        "zone": "vault",
        "fakemode": true,
        "store_by_serial": true,
        "store_by_cn": true,
    }));

    repository.create_role(&name, body.into_entry()).await?;

    let view = repository.read_role(&name).await?;

    // Serial wins when both deprecated flags are set; the flags themselves
    // are still visible
    assert_eq!(view.store_by, "serial");
    assert!(view.store_by_serial);
    assert!(view.store_by_cn);

    Ok(())
}

#[tokio::test]
async fn create_overwrites_an_existing_role_wholesale() -> anyhow::Result<()> {
    let repository = repository();
    let name = RoleName::new("racer")?;

    let first = body(json!({
        "zone": "first-zone",
        "fakemode": true,
        "ttl": 300,
    }));
    let second = body(json!({
        "zone": "second-zone",
        "fakemode": true,
    }));

    repository.create_role(&name, first.into_entry()).await?;
    repository.create_role(&name, second.into_entry()).await?;

    let view = repository.read_role(&name).await?;

    // No partial merge: the second write replaces every field
    assert_eq!(view.zone, "second-zone");
    assert_eq!(view.ttl, 0);

    Ok(())
}

#[tokio::test]
async fn reading_an_absent_role_is_not_found() {
    let repository = repository();
    let name = RoleName::new("missing").expect("valid name");

    let err = repository.read_role(&name).await.unwrap_err();

    assert!(matches!(err, AppError::RoleNotFound));
}

#[tokio::test]
async fn deleting_a_nonexistent_role_succeeds() -> anyhow::Result<()> {
    let repository = repository();
    let name = RoleName::new("nonexistent")?;

    repository.delete_role(&name).await?;

    assert!(!repository
        .list_roles()
        .await?
        .contains(&"nonexistent".to_string()));

    Ok(())
}

#[tokio::test]
async fn list_returns_sorted_role_names() -> anyhow::Result<()> {
    let repository = repository();

    for name in ["zeta", "alpha", "mid"] {
        let body = body(json!({
            "zone": "vault",
            "fakemode": true,
        }));

        repository
            .create_role(&RoleName::new(name)?, body.into_entry())
            .await?;
    }

    assert_eq!(repository.list_roles().await?, vec!["alpha", "mid", "zeta"]);

    let deleted = RoleName::new("mid")?;
    repository.delete_role(&deleted).await?;

    assert_eq!(repository.list_roles().await?, vec!["alpha", "zeta"]);

    Ok(())
}
