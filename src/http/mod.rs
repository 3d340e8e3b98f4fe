// ============================================================================
// HTTP Module
// axum routers and server loop for both services
// ============================================================================

//! ## URL layout
//!
//! Student service:
//!
//! ```text
//! POST   /students/              create  → Student
//! GET    /students/              list    → [Student]
//! GET    /students/{id}          read    → Student | 404
//! PUT    /students/{id}          update  → Student | 404
//! DELETE /students/{id}          delete  → {"message"} | 404
//! GET    /                       home page
//! GET    /students/html          student table
//! GET    /students/html/{id}     student detail | 404
//! ```
//!
//! Calculator service:
//!
//! ```text
//! GET  /                         calculator form
//! GET  /calc_ui?a=&op=&b=        result page | 400 text/plain
//! POST /calc                     {"a","b","op"} → {"expression","result",..} | 400 {"detail"}
//! GET  /static/*path             static assets
//! ```

mod calculator;
mod error;
mod pages;
mod students;

pub use error::{ApiError, ServeError};

use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::{ServiceConfig, ServiceKind};
use crate::interfaces::LoggingEventHandler;
use crate::store::StudentStore;

// ── Routers ───────────────────────────────────────────────────────────────────

/// Router for the student service over a shared store.
pub fn student_router(store: Arc<StudentStore>) -> Router {
    Router::new()
        // JSON API
        .route("/students/", get(students::list).post(students::create))
        .route("/students", get(students::list).post(students::create))
        .route(
            "/students/{id}",
            get(students::read)
                .put(students::update)
                .delete(students::delete),
        )
        // HTML pages
        .route("/", get(students::home))
        .route("/students/html", get(students::list_page))
        .route("/students/html/{id}", get(students::detail_page))
        .with_state(store)
}

/// Router for the calculator service, serving assets from `static_dir`.
pub fn calculator_router(static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(calculator::home))
        .route("/calc_ui", get(calculator::calc_ui))
        .route("/calc", post(calculator::calc_json))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
}

/// Router for whichever service `config` describes.
pub fn router_for(config: &ServiceConfig) -> Router {
    match config.kind {
        ServiceKind::StudentApi => {
            let store = StudentStore::with_event_handler(Arc::new(LoggingEventHandler));
            student_router(Arc::new(store))
        },
        ServiceKind::CalculatorApi => calculator_router(&config.static_dir),
    }
}

// ── Server loop ───────────────────────────────────────────────────────────────

/// Bind and serve until Ctrl-C.
pub async fn serve(config: ServiceConfig) -> Result<(), ServeError> {
    config.validate().map_err(ServeError::Config)?;
    let addr = config.socket_addr().map_err(ServeError::Config)?;

    let router = router_for(&config).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    info!(service = %config.kind, %addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Server)?;

    info!(service = %config.kind, "shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to install Ctrl-C handler: {e}");
        std::future::pending::<()>().await;
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
