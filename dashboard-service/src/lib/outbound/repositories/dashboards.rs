use std::collections::HashMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::models::Dashboard;
use crate::domain::dashboard::models::DashboardId;
use crate::domain::dashboard::ports::DashboardRepository;

/// In-memory dashboard storage with sequential id assignment.
pub struct InMemoryDashboardRepository {
    dashboards: RwLock<HashMap<i64, Dashboard>>,
    next_id: AtomicI64,
}

impl InMemoryDashboardRepository {
    pub fn new() -> Self {
        Self {
            dashboards: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryDashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DashboardRepository for InMemoryDashboardRepository {
    async fn create(&self, dashboard: Dashboard) -> Result<Dashboard, DashboardError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let created = Dashboard {
            id: DashboardId(id),
            ..dashboard
        };

        let mut dashboards = self
            .dashboards
            .write()
            .map_err(|e| DashboardError::StorageError(e.to_string()))?;
        dashboards.insert(id, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: DashboardId) -> Result<Option<Dashboard>, DashboardError> {
        let dashboards = self
            .dashboards
            .read()
            .map_err(|e| DashboardError::StorageError(e.to_string()))?;

        Ok(dashboards.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Dashboard>, DashboardError> {
        let dashboards = self
            .dashboards
            .read()
            .map_err(|e| DashboardError::StorageError(e.to_string()))?;

        let mut all: Vec<Dashboard> = dashboards.values().cloned().collect();
        all.sort_by_key(|dashboard| dashboard.id.0);
        Ok(all)
    }

    async fn update(&self, dashboard: Dashboard) -> Result<Dashboard, DashboardError> {
        let mut dashboards = self
            .dashboards
            .write()
            .map_err(|e| DashboardError::StorageError(e.to_string()))?;

        match dashboards.get_mut(&dashboard.id.0) {
            Some(existing) => {
                *existing = dashboard.clone();
                Ok(dashboard)
            }
            None => Err(DashboardError::NotFound(dashboard.id.0)),
        }
    }

    async fn delete(&self, id: DashboardId) -> Result<(), DashboardError> {
        let mut dashboards = self
            .dashboards
            .write()
            .map_err(|e| DashboardError::StorageError(e.to_string()))?;

        dashboards
            .remove(&id.0)
            .map(|_| ())
            .ok_or(DashboardError::NotFound(id.0))
    }
}
