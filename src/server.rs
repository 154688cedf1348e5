//! actix-web surface for the relay.
//!
//! - `POST {prefix}/chat`
//! - `GET {prefix}/models`
//! - `GET /health`

use crate::{error::RelayError, relay::Relay};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer, ResponseError};
use log::{error, info, warn};
use std::io;

/// Caller bodies may carry inline images.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub async fn serve(relay: Relay) -> io::Result<()> {
    let addr = relay.config().bind_addr();
    info!("chat-relay listening on {}", addr);

    let relay = web::Data::new(relay);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(routes(relay.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

pub fn routes(relay: web::Data<Relay>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let prefix = relay.config().api_prefix.clone();
        cfg.app_data(relay)
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .route("/health", web::get().to(health_check))
            .service(
                web::scope(&prefix)
                    .route("/chat", web::post().to(handle_chat))
                    .route("/models", web::get().to(handle_models)),
            );
    }
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handle_chat(
    relay: web::Data<Relay>,
    body: web::Bytes,
) -> Result<HttpResponse, RelayError> {
    let reply = relay
        .submit_chat(&body)
        .await
        .map_err(|e| log_failure("chat", e))?;
    Ok(HttpResponse::Ok().json(reply))
}

async fn handle_models(relay: web::Data<Relay>) -> Result<HttpResponse, RelayError> {
    let models = relay
        .list_models()
        .await
        .map_err(|e| log_failure("models", e))?;
    Ok(HttpResponse::Ok().json(models))
}

fn log_failure(route: &str, err: RelayError) -> RelayError {
    let status = err.status_code();
    match &err {
        RelayError::BadRequest(_) => warn!("{} rejected ({}): {}", route, status, err),
        _ => match err.details() {
            Some(details) => error!("{} failed ({}): {} {}", route, status, err, details),
            None => error!("{} failed ({}): {}", route, status, err),
        },
    }
    err
}
