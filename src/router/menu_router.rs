use crate::handler::menu_handler::{menu_page_handler, MenuState};
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn menu_router(state: Arc<MenuState>) -> Router {
    Router::new()
        .route("/menu", get(menu_page_handler))
        .with_state(state)
}
