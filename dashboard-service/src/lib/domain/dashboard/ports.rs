use async_trait::async_trait;

use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::models::CreateDashboardCommand;
use crate::domain::dashboard::models::Dashboard;
use crate::domain::dashboard::models::DashboardId;
use crate::domain::dashboard::models::UpdateDashboardCommand;

/// Port for dashboard domain service operations.
#[async_trait]
pub trait DashboardServicePort: Send + Sync + 'static {
    /// Retrieve every dashboard.
    ///
    /// # Errors
    /// * `StorageError` - Storage operation failed
    async fn list_dashboards(&self) -> Result<Vec<Dashboard>, DashboardError>;

    /// Retrieve one dashboard by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Dashboard does not exist
    /// * `StorageError` - Storage operation failed
    async fn get_dashboard(&self, id: DashboardId) -> Result<Dashboard, DashboardError>;

    /// Create a new dashboard with server-assigned id and timestamps.
    ///
    /// # Errors
    /// * `StorageError` - Storage operation failed
    async fn create_dashboard(
        &self,
        command: CreateDashboardCommand,
    ) -> Result<Dashboard, DashboardError>;

    /// Update an existing dashboard.
    ///
    /// # Errors
    /// * `NotFound` - Dashboard does not exist
    /// * `StorageError` - Storage operation failed
    async fn update_dashboard(
        &self,
        id: DashboardId,
        command: UpdateDashboardCommand,
    ) -> Result<Dashboard, DashboardError>;

    /// Delete an existing dashboard.
    ///
    /// # Errors
    /// * `NotFound` - Dashboard does not exist
    /// * `StorageError` - Storage operation failed
    async fn delete_dashboard(&self, id: DashboardId) -> Result<(), DashboardError>;
}

/// Persistence operations for the dashboard aggregate.
#[async_trait]
pub trait DashboardRepository: Send + Sync + 'static {
    /// Persist a new dashboard, assigning its id.
    async fn create(&self, dashboard: Dashboard) -> Result<Dashboard, DashboardError>;

    /// Retrieve a dashboard by identifier (`None` if not found).
    async fn find_by_id(&self, id: DashboardId) -> Result<Option<Dashboard>, DashboardError>;

    /// Retrieve all dashboards.
    async fn list_all(&self) -> Result<Vec<Dashboard>, DashboardError>;

    /// Update an existing dashboard in storage.
    ///
    /// # Errors
    /// * `NotFound` - Dashboard does not exist
    async fn update(&self, dashboard: Dashboard) -> Result<Dashboard, DashboardError>;

    /// Remove a dashboard from storage.
    ///
    /// # Errors
    /// * `NotFound` - Dashboard does not exist
    async fn delete(&self, id: DashboardId) -> Result<(), DashboardError>;
}
