use std::fmt;

use chrono::DateTime;
use chrono::Utc;

/// Dashboard unique identifier type
///
/// Sequential, assigned by the repository on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DashboardId(pub i64);

impl fmt::Display for DashboardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Dashboard aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub id: DashboardId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Command to create a new dashboard
#[derive(Debug)]
pub struct CreateDashboardCommand {
    pub title: String,
}

/// Command to update an existing dashboard.
///
/// Only provided fields are updated; `updated_at` is refreshed by the
/// service either way.
#[derive(Debug)]
pub struct UpdateDashboardCommand {
    pub title: Option<String>,
}
