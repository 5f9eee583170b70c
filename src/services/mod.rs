pub mod api;
pub mod auth;
pub mod session;
pub mod stations;
