use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Health status enumeration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Every component is operational
    Healthy,
    /// A non-critical component is unavailable
    Degraded,
    /// A critical component is unavailable
    Unhealthy,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Degraded => write!(f, "degraded"),
            HealthStatus::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// Result of probing one component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentCheck {
    pub name: String,
    pub available: bool,
    /// Whether the gateway can serve requests without this component
    pub critical: bool,
}

impl ComponentCheck {
    pub fn new(name: impl Into<String>, available: bool, critical: bool) -> Self {
        Self {
            name: name.into(),
            available,
            critical,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Per-component results
    pub components: Vec<ComponentCheck>,
    /// Detailed health information
    pub details: Value,
}

impl HealthResponse {
    /// Derive the overall status from component checks
    pub fn from_checks(components: Vec<ComponentCheck>, details: Value) -> Self {
        let status = if components.iter().any(|c| c.critical && !c.available) {
            HealthStatus::Unhealthy
        } else if components.iter().any(|c| !c.available) {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };

        Self {
            status,
            components,
            details,
        }
    }

    /// Check if the service is available (healthy or degraded)
    pub fn is_available(&self) -> bool {
        matches!(self.status, HealthStatus::Healthy | HealthStatus::Degraded)
    }

    /// Get HTTP status code for the health status
    pub fn http_status_code(&self) -> u16 {
        match self.status {
            HealthStatus::Healthy => 200,
            HealthStatus::Degraded => 200,
            HealthStatus::Unhealthy => 503,
        }
    }
}
