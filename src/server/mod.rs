//! main file for the server

pub(crate) mod controller;
pub mod model;
mod state;
mod upstream;
#[cfg(test)]
mod test_util;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use log::info;
use crate::server::controller::orders::get_orders;
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;
use crate::server::upstream::user_directory::UserDirectory;

/// Register every route the service exposes
pub(crate) fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_orders);
}

/// Run the server
pub async fn run(ServerConfig{ addr, upstream }: ServerConfig) -> anyhow::Result<()> {
    let user_directory = UserDirectory::new(&upstream).context("failed to build user directory client")?;
    info!("listening on {}, user directory at {}", addr, user_directory.users_url());
    let state = web::Data::new(AppState::new(user_directory));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes)
    })
        .bind(addr)
        .with_context(|| format!("failed to bind {addr}"))?
        .run()
        .await?;
    Ok(())
}
