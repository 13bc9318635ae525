//! docsim HTTP server
//!
//! Actix-web adapter around the similarity pipeline

pub mod error;
pub mod payload;
pub mod routes;
pub mod state;
pub mod types;

use actix_web::{web, App, HttpServer};
use docsim_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::state::AppState;

/// Register routes, shared state and the body size limit
pub fn configure(cfg: &mut web::ServiceConfig, state: Arc<AppState>) {
    let limit = state.config.max_payload_bytes;

    cfg.app_data(web::Data::new(state))
        .app_data(web::PayloadConfig::new(limit))
        .service(routes::system::index)
        .service(routes::system::health)
        .service(routes::similarity::similarity);
}

/// Start the HTTP server and run until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    info!(
        "Starting server on {} (stop_words={}, list={}, weighting={}, max_ngram={})",
        bind_addr,
        state.config.similarity.stop_words,
        state.config.similarity.stop_word_list,
        state.config.similarity.weighting,
        state.config.similarity.max_ngram
    );

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(|cfg| configure(cfg, Arc::clone(&state)))
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
