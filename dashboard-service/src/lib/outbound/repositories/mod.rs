pub mod credentials;
pub mod dashboards;

pub use credentials::InMemoryUserRepository;
pub use dashboards::InMemoryDashboardRepository;
