// ============================================================================
// Service Configuration
// Bind address, static assets and log filter for each web service
// ============================================================================

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable overriding the bind address
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
/// Environment variable overriding the static asset directory
pub const ENV_STATIC_DIR: &str = "STATIC_DIR";
/// Environment variable overriding the default log filter
pub const ENV_LOG_FILTER: &str = "LOG_FILTER";

// ============================================================================
// Service Kind
// ============================================================================

/// Which of the two web services a configuration describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// Student record CRUD API with HTML pages
    StudentApi,
    /// Decimal calculator with HTML form and JSON endpoint
    CalculatorApi,
}

impl ServiceKind {
    pub const fn name(self) -> &'static str {
        match self {
            ServiceKind::StudentApi => "student-api",
            ServiceKind::CalculatorApi => "calculator-api",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Complete Service Configuration
// ============================================================================

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub kind: ServiceKind,

    /// Socket address to listen on, e.g. "127.0.0.1:8000"
    pub bind_addr: String,

    /// Directory served under `/static` (calculator only)
    pub static_dir: PathBuf,

    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl ServiceConfig {
    /// Create a new configuration with required parameters
    pub fn new(kind: ServiceKind, bind_addr: impl Into<String>) -> Self {
        Self {
            kind,
            bind_addr: bind_addr.into(),
            static_dir: PathBuf::from("static"),
            log_filter: "info".to_string(),
        }
    }

    /// Builder method: Set bind address
    pub fn with_bind_addr(mut self, bind_addr: impl Into<String>) -> Self {
        self.bind_addr = bind_addr.into();
        self
    }

    /// Builder method: Set static asset directory
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Builder method: Set log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Apply `BIND_ADDR`, `STATIC_DIR` and `LOG_FILTER` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Empty values are ignored.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key| lookup(key).filter(|v: &String| !v.trim().is_empty());

        if let Some(addr) = get(ENV_BIND_ADDR) {
            self.bind_addr = addr;
        }
        if let Some(dir) = get(ENV_STATIC_DIR) {
            self.static_dir = PathBuf::from(dir);
        }
        if let Some(filter) = get(ENV_LOG_FILTER) {
            self.log_filter = filter;
        }
        self
    }

    /// Parsed bind address
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.bind_addr
            .parse()
            .map_err(|e| format!("Invalid bind address '{}': {}", self.bind_addr, e))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.socket_addr()?;

        if self.log_filter.trim().is_empty() {
            return Err("Log filter cannot be empty".to_string());
        }

        if self.kind == ServiceKind::CalculatorApi && self.static_dir.as_os_str().is_empty() {
            return Err("Static directory cannot be empty".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ServiceConfig {
    /// Student API on 127.0.0.1:8000
    pub fn student_api() -> Self {
        Self::new(ServiceKind::StudentApi, "127.0.0.1:8000")
    }

    /// Calculator API on 127.0.0.1:8001, serving `./static`
    pub fn calculator_api() -> Self {
        Self::new(ServiceKind::CalculatorApi, "127.0.0.1:8001")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_presets() {
        let student = ServiceConfig::student_api();
        assert_eq!(student.kind, ServiceKind::StudentApi);
        assert_eq!(student.bind_addr, "127.0.0.1:8000");
        assert!(student.validate().is_ok());

        let calc = ServiceConfig::calculator_api();
        assert_eq!(calc.kind.name(), "calculator-api");
        assert_eq!(calc.static_dir, PathBuf::from("static"));
        assert!(calc.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ServiceConfig::calculator_api()
            .with_bind_addr("0.0.0.0:9000")
            .with_static_dir("/srv/assets")
            .with_log_filter("debug");

        assert_eq!(config.socket_addr().unwrap().port(), 9000);
        assert_eq!(config.static_dir, PathBuf::from("/srv/assets"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [(ENV_BIND_ADDR, "0.0.0.0:8080"), (ENV_LOG_FILTER, "")]
            .into_iter()
            .collect();

        let config = ServiceConfig::student_api()
            .with_overrides_from(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        // empty values keep the default
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_validation() {
        let bad_addr = ServiceConfig::student_api().with_bind_addr("localhost");
        assert!(bad_addr.validate().is_err());

        let bad_filter = ServiceConfig::student_api().with_log_filter("  ");
        assert!(bad_filter.validate().is_err());

        let bad_dir = ServiceConfig::calculator_api().with_static_dir("");
        assert!(bad_dir.validate().is_err());
    }
}
