pub mod menu_repo;
pub mod order_repo;
pub mod repository_error;
pub mod user_repo;
