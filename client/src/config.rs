use std::env;
use std::sync::OnceLock;

pub const LOCAL_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const REMOTE_BACKEND_URL: &str = "https://your-deployed-backend-url.com";

const LOOPBACK_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

static BACKEND_URL: OnceLock<String> = OnceLock::new();

/// Runtime inputs for picking a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Host identifier of the environment the client runs in.
    pub host: String,
    /// Address used whenever `host` is not a loopback name.
    pub remote_backend_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            remote_backend_url: REMOTE_BACKEND_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads `RAG_CLIENT_HOST` and `RAG_REMOTE_BACKEND_URL`, honouring a `.env` file.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mut config = Self::default();
        if let Ok(host) = env::var("RAG_CLIENT_HOST") {
            config.host = host;
        }
        if let Ok(url) = env::var("RAG_REMOTE_BACKEND_URL") {
            if !url.trim().is_empty() {
                config.remote_backend_url = url;
            }
        }
        config
    }

    pub fn backend_url(&self) -> String {
        resolve_backend_url(&self.host, &self.remote_backend_url)
    }
}

pub fn is_loopback_host(host: &str) -> bool {
    let host = host.trim().to_ascii_lowercase();
    LOOPBACK_HOSTS.contains(&host.as_str())
}

pub fn resolve_backend_url(host: &str, remote_backend_url: &str) -> String {
    let url = if is_loopback_host(host) {
        LOCAL_BACKEND_URL
    } else {
        remote_backend_url
    };
    url.trim_end_matches('/').to_string()
}

/// Backend address for this process. Resolved from the environment on first
/// call and fixed afterwards.
pub fn backend_url() -> &'static str {
    BACKEND_URL.get_or_init(|| {
        let config = ClientConfig::from_env();
        let url = config.backend_url();
        log::info!("Resolved backend {} for host '{}'", url, config.host);
        url
    })
}
