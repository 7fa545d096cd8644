//! Account store

use std::sync::RwLock;

use crate::errors::PlatformError;
use crate::models::account::{Account, NotificationPreferences, Profile, ProfileUpdate};

/// The single signed-in account
pub struct AccountStore {
    account: RwLock<Account>,
}

impl AccountStore {
    pub fn new(account: Account) -> Self {
        Self {
            account: RwLock::new(account),
        }
    }

    pub fn get(&self) -> Account {
        self.account.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Update name and email; both are required
    pub fn update_profile(&self, update: ProfileUpdate) -> Result<Profile, PlatformError> {
        let name = update.name.trim();
        let email = update.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(PlatformError::ValidationError(
                "name and email are required".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(PlatformError::ValidationError(format!(
                "invalid email address: {}",
                email
            )));
        }

        let mut account = self.account.write().unwrap_or_else(|e| e.into_inner());
        account.profile.name = name.to_string();
        account.profile.email = email.to_string();
        Ok(account.profile.clone())
    }

    pub fn update_notifications(&self, preferences: NotificationPreferences) -> NotificationPreferences {
        let mut account = self.account.write().unwrap_or_else(|e| e.into_inner());
        account.notifications = preferences;
        preferences
    }
}
