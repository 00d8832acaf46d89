use std::path::Path;
use crate::cli::commands::ServeArgs;
use crate::errors::ObserverError;
use crate::api;
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), ObserverError> {
    let config = super::config_from_arg(args.config.as_deref()).await?;

    let host = args.host.unwrap_or_else(|| config.host());
    let port = args.port.unwrap_or_else(|| config.port());
    let db_path = args.db.unwrap_or_else(|| config.db_path());
    let public_dir = args.public_dir.unwrap_or_else(|| config.public_dir());

    info!(host = %host, port, db = %db_path, "Starting API server");

    let state = api::create_app_state(&config, &db_path)?;
    let app = api::build_router_with_public(state, Some(Path::new(&public_dir)));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("The Observer is watching on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ObserverError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
