//! Runtime configuration, read from the command line and environment.

/// Remote API used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://todo-caio.azurewebsites.net/api/";

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "TODO_API_BASE_URL";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "todo_app=info,todo_core=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// First CLI argument, else `TODO_API_BASE_URL`, else the default API.
    pub fn from_env() -> Self {
        Self::resolve(std::env::args().nth(1), std::env::var(BASE_URL_ENV).ok())
    }

    pub fn resolve(arg: Option<String>, env: Option<String>) -> Self {
        let base_url = [arg, env]
            .into_iter()
            .flatten()
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}
