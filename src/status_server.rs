use std::sync::{Arc, Mutex};

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::domain::config::ServerConfig;
use crate::domain::models::{NetworkMapping, ServerType};
use crate::features::mapping::NetworkMapper;
use crate::utils;

pub type SharedMapper = Arc<Mutex<NetworkMapper>>;

#[derive(Serialize)]
pub struct MappingStatus {
    machine: String,
    hostname: Option<String>,
    mappings: Vec<NetworkMapping>,
}

pub fn router(mapper: SharedMapper) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any);

    Router::new()
        .route("/mappings", get(get_mappings))
        .route("/mappings/:server_type", get(get_mapping))
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(mapper)
}

pub async fn run(mapper: SharedMapper) -> Result<()> {
    let addr = format!("127.0.0.1:{}", ServerConfig::STATUS_PORT);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("Status server listening on http://{}", addr);

    axum::serve(listener, router(mapper)).await?;

    Ok(())
}

async fn get_mappings(State(mapper): State<SharedMapper>) -> Result<Json<MappingStatus>, StatusCode> {
    let mapper = mapper.lock().map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(MappingStatus {
        machine: utils::get_machine_name(),
        hostname: mapper.get_hostname().ok().map(str::to_string),
        mappings: mapper.mappings().cloned().collect(),
    }))
}

async fn get_mapping(
    State(mapper): State<SharedMapper>,
    Path(server_type): Path<String>,
) -> Result<Json<NetworkMapping>, StatusCode> {
    let server_type: ServerType = server_type.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    let mapper = mapper.lock().map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    mapper
        .get_mapping_for_server_type(server_type)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn health_check() -> &'static str {
    "ok"
}
