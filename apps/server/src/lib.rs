pub mod error;
pub mod models;
pub mod routes;
pub mod store;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use focusaurus_core::{GlobalSettings, ImportSession};

use crate::store::InMemoryStackStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<InMemoryStackStore>>,
    sessions: Arc<Mutex<HashMap<Uuid, ImportSession>>>,
    settings: Arc<Mutex<GlobalSettings>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(InMemoryStackStore::new())),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            settings: Arc::new(Mutex::new(GlobalSettings::default())),
        }
    }

    // Lock accessors. A poisoned lock means a handler panicked while
    // holding the guard; that is a bug, so all three panic on poison.

    pub fn store(&self) -> MutexGuard<'_, InMemoryStackStore> {
        self.store.lock().expect("store lock")
    }

    pub fn sessions(&self) -> MutexGuard<'_, HashMap<Uuid, ImportSession>> {
        self.sessions.lock().expect("sessions lock")
    }

    pub fn settings(&self) -> MutexGuard<'_, GlobalSettings> {
        self.settings.lock().expect("settings lock")
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the full application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Import session routes
        .route("/api/import/sessions", post(routes::import::create))
        .route("/api/import/sessions/{id}", get(routes::import::show))
        .route("/api/import/sessions/{id}", delete(routes::import::destroy))
        .route("/api/import/sessions/{id}/text", post(routes::import::set_text))
        .route("/api/import/sessions/{id}/file", post(routes::import::load_file))
        .route(
            "/api/import/sessions/{id}/options",
            patch(routes::import::update_options),
        )
        .route(
            "/api/import/sessions/{id}/assignments",
            post(routes::import::assign),
        )
        .route(
            "/api/import/sessions/{id}/assignments",
            delete(routes::import::unassign),
        )
        .route("/api/import/sessions/{id}/confirm", post(routes::import::confirm))
        // Stack routes
        .route("/api/stacks", get(routes::stacks::list))
        .route("/api/stacks", post(routes::stacks::create))
        .route("/api/stacks/{id}", get(routes::stacks::show))
        .route("/api/stacks/{id}", put(routes::stacks::update))
        .route("/api/stacks/{id}", delete(routes::stacks::destroy))
        .route("/api/stacks/{id}/cards", post(routes::stacks::add_card))
        .route("/api/stacks/{id}/goal", put(routes::stacks::save_goal))
        // Settings routes
        .route("/api/settings", get(routes::settings::get_all))
        .route("/api/settings", put(routes::settings::update))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new();

    let app = app_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "4000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
