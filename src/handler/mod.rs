pub mod auth_handler;
pub mod menu_handler;
pub mod network_handler;
pub mod order_handler;
