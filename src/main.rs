//! application entry point

use crate::server::model::config::{ServerConfig, UpstreamConfig};
use anyhow::Context;
use log::{info, warn};
use std::env;
use std::net::SocketAddrV4;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use derive_more::Display;

mod server;

const DEFAULT_HOST_ADDR: &str = "0.0.0.0:5002";
const DEFAULT_USER_SERVICE_URL: &str = "http://user-service:5001";
const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 10;

#[actix_web::main()]
async fn main() -> anyhow::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    let dotenv = match env {
        Env::Prod | Env::Stg => Ok(()), // provided by deployment
        Env::Dev => dotenvy::from_path(Path::new(".env.dev")),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if let Err(e) = dotenv {
        warn!("failed to load envs from .env.dev, using process env only, {}", e);
    }

    // c. run app
    let config = load_config()?;

    info!("App is starting in env={}", env);

    server::run(config).await
}

fn load_config() -> anyhow::Result<ServerConfig> {
    load_config_from(|key| env::var(key).ok())
}

fn load_config_from(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<ServerConfig> {
    let host = lookup("HOST").unwrap_or(DEFAULT_HOST_ADDR.to_string());
    let addr = SocketAddrV4::from_str(host.as_str())
        .with_context(|| format!("failed to parse HOST={host}"))?;

    let base_url = lookup("USER_SERVICE_URL").unwrap_or(DEFAULT_USER_SERVICE_URL.to_string());
    let timeout = match lookup("UPSTREAM_TIMEOUT_SECONDS") {
        Some(v) => v
            .parse::<u64>()
            .with_context(|| format!("failed to parse UPSTREAM_TIMEOUT_SECONDS={v}"))?,
        None => DEFAULT_UPSTREAM_TIMEOUT_SECONDS,
    };

    Ok(ServerConfig::new(addr, UpstreamConfig::new(base_url, upstream_timeout(timeout))))
}

/// zero seconds disables the timeout
fn upstream_timeout(seconds: u64) -> Option<Duration> {
    (seconds > 0).then(|| Duration::from_secs(seconds))
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
