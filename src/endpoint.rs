//! API Endpoint Resolution
//!
//! Maps a resource name onto a fully-qualified collection URL. The base
//! URL depends on where the backend runs: inside a GitHub Codespace the
//! API is exposed through the forwarded-port hostname, otherwise it
//! listens on localhost. The resolver is built from an explicit
//! [`DeploymentConfig`] so endpoint selection is deterministic and
//! testable without touching the process environment; the configuration
//! layer performs the environment lookup once at startup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five collections the OctoFit API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Activities,
    Leaderboard,
    Teams,
    Users,
    Workouts,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Activities,
        Resource::Leaderboard,
        Resource::Teams,
        Resource::Users,
        Resource::Workouts,
    ];

    /// The path segment used in the API URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Activities => "activities",
            Resource::Leaderboard => "leaderboard",
            Resource::Teams => "teams",
            Resource::Users => "users",
            Resource::Workouts => "workouts",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "activities" => Ok(Resource::Activities),
            "leaderboard" => Ok(Resource::Leaderboard),
            "teams" => Ok(Resource::Teams),
            "users" => Ok(Resource::Users),
            "workouts" => Ok(Resource::Workouts),
            _ => Err(UnknownResource(s.to_string())),
        }
    }
}

/// Error for an unrecognized resource name.
#[derive(Debug, thiserror::Error)]
#[error("unknown resource {0:?} (expected one of: activities, leaderboard, teams, users, workouts)")]
pub struct UnknownResource(pub String);

/// Deployment environment used to select the API base URL.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentConfig {
    /// Cloud workspace identifier (a GitHub Codespace name). Any non-empty
    /// value is used as-is; empty means not deployed in a Codespace.
    #[serde(default)]
    pub codespace_name: Option<String>,

    /// Host suffix for forwarded Codespace ports.
    #[serde(default = "default_host_suffix")]
    pub host_suffix: String,

    /// Port the backend listens on (and the forwarded port in a Codespace).
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Fully explicit base URL. Overrides the Codespace/localhost logic
    /// when set; useful for tests and non-standard deployments.
    #[serde(default)]
    pub api_url: Option<String>,
}

fn default_host_suffix() -> String {
    "app.github.dev".to_string()
}

fn default_api_port() -> u16 {
    8000
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            codespace_name: None,
            host_suffix: default_host_suffix(),
            api_port: default_api_port(),
            api_url: None,
        }
    }
}

/// Resolves collection URLs for one deployment. Pure string construction,
/// no validation, no error conditions.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    base: String,
}

impl EndpointResolver {
    pub fn new(deployment: &DeploymentConfig) -> Self {
        if let Some(url) = deployment.api_url.as_deref().filter(|u| !u.is_empty()) {
            return Self::with_base(url);
        }

        let base = match deployment.codespace_name.as_deref() {
            Some(name) if !name.is_empty() => format!(
                "https://{}-{}.{}",
                name, deployment.api_port, deployment.host_suffix
            ),
            _ => format!("http://localhost:{}", deployment.api_port),
        };
        Self { base }
    }

    /// Resolver with an explicit base URL, trailing slash trimmed.
    pub fn with_base(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// The collection URL for a resource.
    pub fn url(&self, resource: Resource) -> String {
        format!("{}/api/{}/", self.base, resource)
    }
}
