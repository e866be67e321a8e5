use crate::error::{ViewerError, ViewerResult};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:3043";
pub const DEFAULT_ANALYZER_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub analyzer_url: String,
    /// Unset means the analysis request may wait forever.
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Loads `.env` (if present) and then reads the process environment.
    pub fn from_env() -> ViewerResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> ViewerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("SITERANK_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ViewerError::Config(format!("SITERANK_BIND={bind}: {e}")))?;

        let analyzer_url = lookup("ANALYZER_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_ANALYZER_URL.to_string());
        if !analyzer_url.starts_with("http://") && !analyzer_url.starts_with("https://") {
            return Err(ViewerError::Config(format!(
                "ANALYZER_URL must be an http(s) URL, got {analyzer_url}"
            )));
        }

        let request_timeout = match lookup("ANALYZER_TIMEOUT_SECS") {
            None => None,
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    ViewerError::Config(format!("ANALYZER_TIMEOUT_SECS={raw}: {e}"))
                })?;
                Some(Duration::from_secs(secs))
            }
        };

        Ok(Config {
            bind_addr,
            analyzer_url,
            request_timeout,
        })
    }
}
