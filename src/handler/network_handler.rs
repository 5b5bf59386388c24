use crate::dto::order_dto::NetworkTestResponse;
use axum::{
    extract::{ConnectInfo, Request},
    response::IntoResponse,
    Json,
};
use chrono::{SecondsFormat, Utc};
use std::net::SocketAddr;

// GET /network-test
//
// Connectivity probe for reaching the server from other devices on the
// network. ConnectInfo is only present when the server is driven through
// into_make_service_with_connect_info, so it is read off the request
// extensions directly.
pub async fn network_test_handler(req: Request) -> impl IntoResponse {
    let client_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    Json(NetworkTestResponse {
        message: "Server is running!".to_string(),
        client_ip,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
