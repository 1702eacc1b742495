use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// How the client reaches the provider. Selected once at startup and fixed
/// for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    /// Straight to the remote host with static Basic-auth credentials.
    Direct,
    /// Through a same-origin gateway that attaches host-session cookies and
    /// wraps responses in a JSON-RPC envelope.
    Proxied,
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportMode::Direct => write!(f, "direct"),
            TransportMode::Proxied => write!(f, "proxied"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub mode: TransportMode,
    pub base_url: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub request_timeout_secs: u64,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub fixtures_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("mode", &self.mode)
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("fixtures_path", &self.fixtures_path)
            .finish()
    }
}
