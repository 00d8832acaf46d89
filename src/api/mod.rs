pub mod routes;
pub mod models;
pub mod errors;

use std::path::Path;
use std::sync::Arc;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use crate::analysis::ContractAnalyzer;
use crate::config::{LLMSettings, ObserverConfig};
use crate::db::Database;
use crate::errors::ObserverError;
use crate::knowledge::KnowledgeBase;
use crate::llm::catalog::describe_model;
use crate::llm::create_provider;
use crate::registry::VulnerableRegistry;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<ContractAnalyzer>,
    pub knowledge: Arc<KnowledgeBase>,
    pub registry: Arc<VulnerableRegistry>,
    pub db: Database,
}

/// Load the catalogs, resolve the model backend and open the exploit store.
/// Fails when the configured provider has no credential.
pub fn create_app_state(config: &ObserverConfig, db_path: &str) -> Result<AppState, ObserverError> {
    let knowledge = Arc::new(KnowledgeBase::builtin()?);
    let registry = Arc::new(load_registry(config)?);

    let settings = LLMSettings::resolve(config.llm.as_ref())?;
    let llm = create_provider(&settings)?;
    info!(
        provider = %settings.provider,
        model = %settings.model,
        "Model backend ready: {}",
        describe_model(&settings.provider, &settings.model)
    );

    let analyzer = Arc::new(ContractAnalyzer::new(llm, knowledge.clone(), registry.clone(), settings.timeout));
    let db = Database::new(db_path)?;

    Ok(AppState { analyzer, knowledge, registry, db })
}

/// Built-in catalog plus the optional extra file named in config.
pub fn load_registry(config: &ObserverConfig) -> Result<VulnerableRegistry, ObserverError> {
    let registry = VulnerableRegistry::builtin()?;
    match config.extra_contracts_path() {
        Some(path) => registry.extend_from_file(Path::new(&path)),
        None => Ok(registry),
    }
}

pub fn build_router(state: AppState) -> Router {
    build_router_with_public(state, None)
}

/// Router with the static front-end served as fallback when `public_dir`
/// exists.
pub fn build_router_with_public(state: AppState, public_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/analysis/analyze", post(routes::analysis::analyze_contract))
        .route("/api/analysis/vulnerable-contracts", get(routes::analysis::list_vulnerable_contracts))
        .route("/api/analysis/vulnerable-contracts/:address", get(routes::analysis::lookup_vulnerable_contract))
        .route("/api/chat/message", post(routes::chat::send_message))
        .route("/api/examples", get(routes::examples::list_examples))
        .route("/api/knowledge/patterns", get(routes::knowledge::list_patterns))
        .route("/api/knowledge/vectors", get(routes::knowledge::list_vectors))
        .route("/api/knowledge/principles", get(routes::knowledge::list_principles))
        .route("/api/exploits", post(routes::exploits::submit_exploit).get(routes::exploits::list_exploits))
        .route("/api/exploits/stats/summary", get(routes::exploits::exploit_stats))
        .route("/api/exploits/:id", get(routes::exploits::get_exploit))
        .with_state(state);

    let router = match public_dir.filter(|dir| dir.is_dir()) {
        Some(dir) => {
            info!(dir = %dir.display(), "Serving static files");
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
