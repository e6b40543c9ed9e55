pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::dashboard;
pub use domain::users;
pub use outbound::repositories;
