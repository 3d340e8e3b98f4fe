// ============================================================================
// Student API
// Student record CRUD service with HTML pages
// ============================================================================

use student_calc::domain::ServiceConfig;
use student_calc::http::{self, ServeError};
use student_calc::logging;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServeError> {
    let config = ServiceConfig::student_api().with_env_overrides();
    config.validate().map_err(ServeError::Config)?;
    logging::init(&config.log_filter).map_err(ServeError::Logging)?;

    http::serve(config).await
}
