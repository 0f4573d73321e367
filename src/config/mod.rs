use reqwest::Client;
use std::{env, path::PathBuf, time::{Duration, Instant}};
use tracing::info;

const DEFAULT_REST_COUNTRIES_URL: &str = "http://129.241.150.113:8080";
const DEFAULT_COUNTRIES_NOW_URL: &str = "http://129.241.150.113:3500";

/// Everything a handler needs; cloned per request by axum.
#[derive(Clone)]
pub struct AppState {
    pub http: Client,
    pub rest_countries_url: String,
    pub countries_now_url: String,
    pub started_at: Instant,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

#[derive(Debug)]
pub struct AppConfig {
    pub port: u16,
    pub rest_countries_url: String,
    pub countries_now_url: String,
    pub static_dir: PathBuf,
    pub external_timeout_ms: u64,
}

/// Unset and empty are treated alike.
fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn base_url(key: &str, default: &str) -> String {
    non_empty(key)
        .unwrap_or_else(|| default.into())
        .trim_end_matches('/')
        .to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let port: u16 = non_empty("PORT").unwrap_or_else(|| "8080".into()).parse()?;
        let external_timeout_ms: u64 = non_empty("EXTERNAL_TIMEOUT_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(12_000);
        let static_dir = PathBuf::from(non_empty("STATIC_DIR").unwrap_or_else(|| "./FrontEnd".into()));
        Ok(Self {
            port,
            rest_countries_url: base_url("REST_COUNTRIES_URL", DEFAULT_REST_COUNTRIES_URL),
            countries_now_url: base_url("COUNTRIES_NOW_URL", DEFAULT_COUNTRIES_NOW_URL),
            static_dir,
            external_timeout_ms,
        })
    }

    pub fn build_state(&self) -> Result<AppState, anyhow::Error> {
        let http = Client::builder()
            .timeout(Duration::from_millis(self.external_timeout_ms))
            .build()?;

        info!(
            rest_countries = %self.rest_countries_url,
            countries_now = %self.countries_now_url,
            static_dir = %self.static_dir.display(),
            "upstreams configured"
        );

        Ok(AppState {
            http,
            rest_countries_url: self.rest_countries_url.clone(),
            countries_now_url: self.countries_now_url.clone(),
            started_at: Instant::now(),
            static_dir: self.static_dir.clone(),
        })
    }
}
