pub mod menu_service;
pub mod order_service;
pub mod user_service;
