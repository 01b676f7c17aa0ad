use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use axum::{routing::get, Router};
use clap::Parser;
use common::{storage::OnDiskStorage, tracing::init_tracing};
use roles_api::{
    cli::Cli,
    controllers::{
        general::get_healthcheck,
        roles::{delete_role, get_role, list_roles, upsert_role},
    },
    role_repository::RoleRepository,
    roles_api_state::RolesApiState,
    DEFAULT_PORT,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let _ = start(cli).await.map_err(|e| {
        tracing::error!("{}", e);
    });
}

async fn start(cli: Cli) -> anyhow::Result<()> {
    init_tracing("info");

    tracing::info!("Cli args: {cli:?}");

    let storage = Arc::new(OnDiskStorage::new(&cli.storage_path));
    let role_repository = RoleRepository::new(storage);

    let roles_api_state = RolesApiState::new(role_repository);

    let app = Router::new()
        // General
        .route("/healthcheck", get(get_healthcheck))
        // Role management
        .route("/roles", get(list_roles))
        .route(
            "/roles/{name}",
            get(get_role).post(upsert_role).delete(delete_role),
        )
        .with_state(roles_api_state);

    let app = Router::new()
        .nest("/v1/", app)
        .layer(TraceLayer::new_for_http());

    let socket_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), DEFAULT_PORT);

    tracing::info!("Starting roles API server on http://{:?}", socket_addr);
    let listener = TcpListener::bind(&socket_addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
