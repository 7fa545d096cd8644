//! Custom domain models

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Address the root A record must point at
pub const EDGE_IPV4: &str = "185.158.133.1";

/// Verification state of a custom domain.
///
/// Status and certificate are one variant so that SSL can only exist on a
/// verified domain. On the wire it is flattened to `status` and `ssl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainState {
    /// Waiting for DNS verification
    Pending,

    /// DNS verified, with or without an issued certificate
    Verified { ssl: bool },

    /// Verification failed
    Failed,
}

impl DomainState {
    pub fn status(&self) -> DomainStatus {
        match self {
            DomainState::Pending => DomainStatus::Pending,
            DomainState::Verified { .. } => DomainStatus::Verified,
            DomainState::Failed => DomainStatus::Failed,
        }
    }

    pub fn ssl(&self) -> bool {
        matches!(self, DomainState::Verified { ssl: true })
    }
}

impl Serialize for DomainState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DomainState", 2)?;
        state.serialize_field("status", &self.status())?;
        state.serialize_field("ssl", &self.ssl())?;
        state.end()
    }
}

/// Coarse domain status used for display and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    Verified,
    Pending,
    Failed,
}

impl DomainStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainStatus::Verified => "verified",
            DomainStatus::Pending => "pending",
            DomainStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verified" => Ok(DomainStatus::Verified),
            "pending" => Ok(DomainStatus::Pending),
            "failed" => Ok(DomainStatus::Failed),
            _ => Err(format!("Invalid domain status: {}", s)),
        }
    }
}

/// A custom hostname attached to a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,
    pub domain: String,
    pub project_id: String,
    pub project_name: String,
    #[serde(flatten)]
    pub state: DomainState,
    pub created_at: NaiveDate,
}

/// Domain creation request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDomain {
    pub domain: String,
    pub project_id: String,
}

/// A DNS record the user has to configure at their registrar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub value: String,
}

/// Records that route `domain` to the platform edge
pub fn dns_records(domain: &str) -> Vec<DnsRecord> {
    vec![
        DnsRecord {
            kind: "A",
            name: "@".to_string(),
            value: EDGE_IPV4.to_string(),
        },
        DnsRecord {
            kind: "CNAME",
            name: "www".to_string(),
            value: domain.to_string(),
        },
    ]
}
