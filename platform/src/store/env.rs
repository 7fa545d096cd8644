//! Project environment variables

use secrecy::SecretString;

use crate::errors::PlatformError;
use crate::models::env::{EnvVar, EnvVarView, NewEnvVar};
use crate::store::records::{Record, Records};
use crate::utils::generate_uuid;

impl Record for EnvVar {
    const KIND: &'static str = "environment variable";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Environment variables of all projects, in insertion order
pub type EnvStore = Records<EnvVar>;

impl Records<EnvVar> {
    /// Variables of a project, values masked unless visible
    pub fn for_project(&self, project_id: &str) -> Vec<EnvVarView> {
        self.read(|entries| {
            entries
                .iter()
                .filter(|e| e.project_id == project_id)
                .map(EnvVar::to_view)
                .collect()
        })
    }

    /// Add a hidden variable. Key and value are both required.
    pub fn add(&self, project_id: &str, request: NewEnvVar) -> Result<EnvVarView, PlatformError> {
        let key = request.key.trim();
        if key.is_empty() || request.value.is_empty() {
            return Err(PlatformError::ValidationError(
                "key and value are required".to_string(),
            ));
        }

        let var = EnvVar {
            id: generate_uuid(),
            project_id: project_id.to_string(),
            key: key.to_string(),
            value: SecretString::from(request.value),
            visible: false,
        };
        let view = var.to_view();
        self.push(var);
        Ok(view)
    }

    /// Flip whether the value is shown in clear
    pub fn toggle_visibility(&self, project_id: &str, id: &str) -> Result<EnvVarView, PlatformError> {
        self.update(id, |var| {
            if var.project_id != project_id {
                return Err(PlatformError::not_found(EnvVar::KIND, id));
            }
            var.visible = !var.visible;
            Ok(var.to_view())
        })
    }

    /// Delete a variable of the project
    pub fn delete(&self, project_id: &str, id: &str) -> Result<(), PlatformError> {
        let owned = self.read(|entries| {
            entries
                .iter()
                .any(|e| e.id == id && e.project_id == project_id)
        });
        if !owned {
            return Err(PlatformError::not_found(EnvVar::KIND, id));
        }
        self.remove(id).map(|_| ())
    }
}
