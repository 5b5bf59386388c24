pub mod auth_dto;
pub mod order_dto;
