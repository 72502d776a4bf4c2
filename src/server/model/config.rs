use std::net::SocketAddrV4;
use std::time::Duration;

/// Server configs
#[derive(Debug)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    pub upstream: UpstreamConfig,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, upstream: UpstreamConfig) -> Self {
        Self {
            addr,
            upstream,
        }
    }
}

/// Where and how to reach the user directory
#[derive(Debug, Clone)]
pub(crate) struct UpstreamConfig {
    /// base url, e.g. `http://user-service:5001`
    pub base_url: String,
    /// `None` waits for as long as the network stack does
    pub timeout: Option<Duration>,
}

impl UpstreamConfig {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Self {
        Self {
            base_url,
            timeout,
        }
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url.trim_end_matches('/'))
    }
}
