// ⚙️ Runtime configuration shared by the CLI and the server

use tracing_subscriber::EnvFilter;

/// Environment variable holding the server bind address
pub const ADDR_ENV: &str = "TIME_ALLOCATION_ADDR";

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Log filter used when neither `--debug` nor `RUST_LOG` is given
pub const DEFAULT_LOG_FILTER: &str = "error";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (env, tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup(ADDR_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());

        ServerConfig { addr }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}

/// Initialize tracing subscriber (stderr)
///
/// `--debug` forces DEBUG for everything; otherwise `RUST_LOG` applies,
/// falling back to errors only.
pub fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
