use crate::middlewares::session_middleware::CurrentUser;
use crate::service::menu_service::MenuService;
use crate::util::policy::{authorize, Capability};
use crate::view::pages;
use axum::{
    extract::{Extension, State},
    response::{Html, IntoResponse, Redirect},
};
use std::sync::Arc;

pub struct MenuState {
    pub menu_service: Arc<dyn MenuService>,
}

// GET /menu
pub async fn menu_page_handler(
    State(state): State<Arc<MenuState>>,
    Extension(current): Extension<CurrentUser>,
) -> impl IntoResponse {
    match &current.0 {
        Some(user) if authorize(Capability::Customer, current.role()) => {
            let menu = state.menu_service.group_by_category().await;
            Html(pages::menu_page(user, &menu)).into_response()
        }
        _ => Redirect::to("/").into_response(),
    }
}
