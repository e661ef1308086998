use std::{env, path::PathBuf, str::FromStr, time::Duration};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub catalog_path: PathBuf,
    pub max_body_bytes: usize,
    pub request_timeout: Duration,
    pub max_concurrent_requests: usize,
    pub enable_docs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            catalog_path: PathBuf::from("./mock_products.json"),
            max_body_bytes: 1024 * 1024,
            request_timeout: Duration::from_secs(30),
            max_concurrent_requests: 100,
            enable_docs: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = env::var("APP_HOST").unwrap_or(defaults.host);
        let port = parsed_var("APP_PORT").unwrap_or(defaults.port);
        let catalog_path = env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog_path);
        let max_body_bytes = parsed_var("MAX_BODY_BYTES").unwrap_or(defaults.max_body_bytes);
        let request_timeout = parsed_var("REQUEST_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);
        let max_concurrent_requests =
            parsed_var("MAX_CONCURRENT_REQUESTS").unwrap_or(defaults.max_concurrent_requests);
        let enable_docs = parsed_var("APP_DOCS").unwrap_or(defaults.enable_docs);

        anyhow::ensure!(
            max_concurrent_requests > 0,
            "MAX_CONCURRENT_REQUESTS must be greater than zero"
        );

        Ok(Self {
            host,
            port,
            catalog_path,
            max_body_bytes,
            request_timeout,
            max_concurrent_requests,
            enable_docs,
        })
    }
}

fn parsed_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}
