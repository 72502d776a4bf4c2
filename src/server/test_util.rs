//! fake user directories for handler and client tests

use std::net::TcpListener;
use std::time::Duration;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};

/// Serve `body` with `status` on `GET /users` after `delay`, returns the base url.
/// The server lives as long as the test's actix system.
pub(crate) fn spawn_upstream(status: StatusCode, body: &'static str, delay: Duration) -> String {
    let server = HttpServer::new(move || {
        App::new().route("/users", web::get().to(move || async move {
            tokio::time::sleep(delay).await;
            HttpResponse::build(status)
                .content_type("application/json")
                .body(body)
        }))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("failed to bind fake user directory");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

/// base url of a port nothing is listening on
pub(crate) fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind probe listener");
    let addr = listener.local_addr().expect("probe listener has no address");
    drop(listener);
    format!("http://{addr}")
}
