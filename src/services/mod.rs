pub mod lifetime;
pub mod users_api;
