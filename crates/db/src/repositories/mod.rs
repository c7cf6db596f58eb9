pub mod component_repo;
pub mod monitor_repo;
pub mod session_repo;
pub mod user_repo;

pub use component_repo::ComponentRepo;
pub use monitor_repo::MonitorRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
