//! List filtering shared by the project, deployment and log views

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::models::deployment::DeploymentStatus;
use crate::models::log::LogSeverity;
use crate::models::project::ProjectStatus;

/// Case-insensitive substring match of `term` against any of `fields`.
///
/// An empty term matches everything.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Equality filter where `all` disables the filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(expected) => expected == value,
        }
    }
}

impl<T> FromStr for Choice<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(Choice::All);
        }
        s.parse().map(Choice::Only).map_err(|e: T::Err| e.to_string())
    }
}

impl<'de, T> Deserialize<'de> for Choice<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Project list filter: search over name or framework
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Choice<ProjectStatus>,
}

/// Deployment history filter: search over project name or commit message
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeploymentQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Choice<DeploymentStatus>,
}

/// Build log filter: search over message or project name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogQuery {
    #[serde(default)]
    pub search: String,

    /// Project id or project name
    #[serde(default)]
    pub project: Choice<String>,
    #[serde(default)]
    pub level: Choice<LogSeverity>,
}
