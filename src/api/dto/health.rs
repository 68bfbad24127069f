//! Body of `GET /health`.

use serde::Serialize;

/// Overall service state, `healthy` only when every check passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Result of probing one dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckOutcome {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: CheckOutcome,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: CheckOutcome::Ok,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: CheckOutcome::Error,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub record_store: CheckStatus,
}

impl HealthChecks {
    fn all_ok(&self) -> bool {
        self.record_store.status == CheckOutcome::Ok
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

impl HealthResponse {
    /// Derives the overall status from `checks`.
    pub fn from_checks(checks: HealthChecks) -> Self {
        let status = if checks.all_ok() {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Degraded
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}
