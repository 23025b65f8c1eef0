use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://quiz_app.db";
pub const DEFAULT_LOG_FILTER: &str = "quizdb=error";

/// Runtime settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: non_empty_var("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            log_filter: non_empty_var("RUST_LOG")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_database_url(DEFAULT_DATABASE_URL)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_file() {
        let config = AppConfig::default();
        assert_eq!(config.database_url, "sqlite://quiz_app.db");
        assert_eq!(config.log_filter, "quizdb=error");
    }

    #[test]
    fn test_with_database_url_keeps_default_filter() {
        let config = AppConfig::with_database_url("sqlite::memory:");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
