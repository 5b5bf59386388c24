use crate::handler::auth_handler::{
    index_handler, login_handler, logout_handler, register_handler, AuthState,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn auth_router(state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/login", post(login_handler))
        .route("/register", post(register_handler))
        .route("/logout", get(logout_handler))
        .with_state(state)
}
