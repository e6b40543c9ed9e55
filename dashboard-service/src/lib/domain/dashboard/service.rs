use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::models::CreateDashboardCommand;
use crate::domain::dashboard::models::Dashboard;
use crate::domain::dashboard::models::DashboardId;
use crate::domain::dashboard::models::UpdateDashboardCommand;
use crate::domain::dashboard::ports::DashboardRepository;
use crate::domain::dashboard::ports::DashboardServicePort;

/// Domain service implementation for dashboard operations.
pub struct DashboardService<R>
where
    R: DashboardRepository,
{
    repository: Arc<R>,
}

impl<R> DashboardService<R>
where
    R: DashboardRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DashboardServicePort for DashboardService<R>
where
    R: DashboardRepository,
{
    async fn list_dashboards(&self) -> Result<Vec<Dashboard>, DashboardError> {
        self.repository.list_all().await
    }

    async fn get_dashboard(&self, id: DashboardId) -> Result<Dashboard, DashboardError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DashboardError::NotFound(id.0))
    }

    async fn create_dashboard(
        &self,
        command: CreateDashboardCommand,
    ) -> Result<Dashboard, DashboardError> {
        let now = Utc::now();
        let dashboard = Dashboard {
            // Placeholder id, replaced by the repository on insert
            id: DashboardId(0),
            title: command.title,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(dashboard).await?;
        tracing::info!(dashboard_id = %created.id, "Dashboard created");
        Ok(created)
    }

    async fn update_dashboard(
        &self,
        id: DashboardId,
        command: UpdateDashboardCommand,
    ) -> Result<Dashboard, DashboardError> {
        let mut dashboard = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(DashboardError::NotFound(id.0))?;

        if let Some(new_title) = command.title {
            dashboard.title = new_title;
        }
        dashboard.updated_at = Utc::now();

        self.repository.update(dashboard).await
    }

    async fn delete_dashboard(&self, id: DashboardId) -> Result<(), DashboardError> {
        self.repository.delete(id).await?;
        tracing::info!(dashboard_id = %id, "Dashboard deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestDashboardRepository {}

        #[async_trait]
        impl DashboardRepository for TestDashboardRepository {
            async fn create(&self, dashboard: Dashboard) -> Result<Dashboard, DashboardError>;
            async fn find_by_id(&self, id: DashboardId) -> Result<Option<Dashboard>, DashboardError>;
            async fn list_all(&self) -> Result<Vec<Dashboard>, DashboardError>;
            async fn update(&self, dashboard: Dashboard) -> Result<Dashboard, DashboardError>;
            async fn delete(&self, id: DashboardId) -> Result<(), DashboardError>;
        }
    }

    fn sample_dashboard(id: i64, title: &str) -> Dashboard {
        let now = Utc::now();
        Dashboard {
            id: DashboardId(id),
            title: title.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_dashboard_assigns_id() {
        let mut repository = MockTestDashboardRepository::new();

        repository
            .expect_create()
            .withf(|dashboard| dashboard.title == "Sales")
            .times(1)
            .returning(|dashboard| {
                Ok(Dashboard {
                    id: DashboardId(1),
                    ..dashboard
                })
            });

        let service = DashboardService::new(Arc::new(repository));

        let created = service
            .create_dashboard(CreateDashboardCommand {
                title: "Sales".to_string(),
            })
            .await
            .expect("Failed to create dashboard");

        assert_eq!(created.id, DashboardId(1));
        assert_eq!(created.title, "Sales");
    }

    #[tokio::test]
    async fn test_get_dashboard_success() {
        let mut repository = MockTestDashboardRepository::new();
        let dashboard = sample_dashboard(7, "Ops");

        let returned = dashboard.clone();
        repository
            .expect_find_by_id()
            .with(eq(DashboardId(7)))
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = DashboardService::new(Arc::new(repository));

        let found = service.get_dashboard(DashboardId(7)).await.unwrap();
        assert_eq!(found, dashboard);
    }

    #[tokio::test]
    async fn test_get_dashboard_not_found() {
        let mut repository = MockTestDashboardRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = DashboardService::new(Arc::new(repository));

        let result = service.get_dashboard(DashboardId(42)).await;
        assert!(matches!(result, Err(DashboardError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_update_dashboard_replaces_title_and_touches_timestamp() {
        let mut repository = MockTestDashboardRepository::new();
        let existing = sample_dashboard(3, "Old title");
        let previous_updated_at = existing.updated_at;

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .with(eq(DashboardId(3)))
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_update()
            .withf(move |dashboard| {
                dashboard.title == "New title" && dashboard.updated_at >= previous_updated_at
            })
            .times(1)
            .returning(|dashboard| Ok(dashboard));

        let service = DashboardService::new(Arc::new(repository));

        let updated = service
            .update_dashboard(
                DashboardId(3),
                UpdateDashboardCommand {
                    title: Some("New title".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "New title");
    }

    #[tokio::test]
    async fn test_update_dashboard_not_found() {
        let mut repository = MockTestDashboardRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = DashboardService::new(Arc::new(repository));

        let result = service
            .update_dashboard(DashboardId(9), UpdateDashboardCommand { title: None })
            .await;
        assert!(matches!(result, Err(DashboardError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_delete_dashboard_not_found() {
        let mut repository = MockTestDashboardRepository::new();
        repository
            .expect_delete()
            .times(1)
            .returning(|id| Err(DashboardError::NotFound(id.0)));

        let service = DashboardService::new(Arc::new(repository));

        let result = service.delete_dashboard(DashboardId(5)).await;
        assert!(matches!(result, Err(DashboardError::NotFound(5))));
    }
}
