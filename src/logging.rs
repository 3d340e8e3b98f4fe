// ============================================================================
// Logging
// tracing-subscriber initialisation for the service binaries
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` (e.g. `"info"` or
/// `"student_calc=debug,tower_http=info"`) is used.
///
/// # Errors
/// Returns a message if the filter does not parse or a global subscriber is
/// already installed.
pub fn init(default_filter: &str) -> Result<(), String> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| format!("invalid log filter '{default_filter}': {e}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| format!("logger already initialized: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init("info");
        assert!(init("info").is_err());
    }
}
