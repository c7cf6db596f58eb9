pub mod component;
pub mod monitor;
pub mod session;
pub mod user;
