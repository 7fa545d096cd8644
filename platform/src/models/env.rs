//! Project environment variable models

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Placeholder shown in place of hidden values
pub const MASK: &str = "••••••••••••";

/// An environment variable attached to a project
#[derive(Debug)]
pub struct EnvVar {
    pub id: String,
    pub project_id: String,
    pub key: String,
    pub value: SecretString,
    pub visible: bool,
}

impl EnvVar {
    /// Render the variable, masking the value unless it is visible
    pub fn to_view(&self) -> EnvVarView {
        let value = if self.visible {
            self.value.expose_secret().to_string()
        } else {
            MASK.to_string()
        };

        EnvVarView {
            id: self.id.clone(),
            key: self.key.clone(),
            value,
            visible: self.visible,
        }
    }
}

/// Environment variable as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvVarView {
    pub id: String,
    pub key: String,
    pub value: String,
    pub visible: bool,
}

/// Environment variable creation request
#[derive(Debug, Default, Deserialize)]
pub struct NewEnvVar {
    pub key: String,
    pub value: String,
}
