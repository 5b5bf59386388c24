use crate::handler::order_handler::{
    admin_dashboard_handler, my_orders_handler, place_order_handler, update_status_handler,
    OrderState,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn order_router(state: Arc<OrderState>) -> Router {
    // Customer-facing routes
    let customer = Router::new()
        .route("/order", post(place_order_handler))
        .route("/my-orders", get(my_orders_handler));

    // Admin routes. Authorization happens in the handlers against the
    // resolved session, not via a route layer, so denials can render as
    // redirects or {success:false} instead of HTTP errors.
    let admin = Router::new()
        .route("/admin", get(admin_dashboard_handler))
        .route("/admin/update-status", post(update_status_handler));

    customer.merge(admin).with_state(state)
}
