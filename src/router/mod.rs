pub mod auth_router;
pub mod menu_router;
pub mod order_router;
