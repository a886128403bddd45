pub mod auth;
pub mod portfolio;
