pub mod auth;
pub mod builder;
pub mod components;
pub mod monitors;
