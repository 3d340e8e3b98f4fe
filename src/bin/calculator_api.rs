// ============================================================================
// Calculator API
// Decimal calculator service with HTML UI and static assets
// ============================================================================

use student_calc::domain::ServiceConfig;
use student_calc::http::{self, ServeError};
use student_calc::logging;
use tracing::warn;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServeError> {
    let config = ServiceConfig::calculator_api().with_env_overrides();
    config.validate().map_err(ServeError::Config)?;
    logging::init(&config.log_filter).map_err(ServeError::Logging)?;

    if !config.static_dir.is_dir() {
        warn!(static_dir = %config.static_dir.display(), "static directory missing; /static will return 404");
    }

    http::serve(config).await
}
