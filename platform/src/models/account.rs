//! Account models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub plan: String,
}

/// Which events the user is notified about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub deployments: bool,
    pub failures: bool,
    pub weekly: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            deployments: true,
            failures: true,
            weekly: false,
        }
    }
}

/// An issued API key; the secret itself is never kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    pub created: NaiveDate,
    pub last_used_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub profile: Profile,
    pub notifications: NotificationPreferences,
    pub api_keys: Vec<ApiKey>,
}

/// Profile update request; the plan is not user-editable
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}
