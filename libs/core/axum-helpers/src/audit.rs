//! Audit logging for tracking data modifications.
//!
//! Emits structured audit events for security-relevant actions such as
//! record creation and deletion from admin surfaces.
//!
//! # Example
//! ```ignore
//! use axum_helpers::audit::{AuditEvent, AuditOutcome};
//!
//! AuditEvent::new(
//!     None,
//!     "project.create",
//!     Some(format!("project:{}", id)),
//!     AuditOutcome::Success,
//! )
//! .with_ip(extract_ip_from_headers(&headers))
//! .with_user_agent(extract_user_agent(&headers))
//! .log();
//! ```

use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of an audited action.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditOutcome {
    /// Action completed successfully
    Success,
    /// Action failed (e.g., validation error, system error)
    Failure,
}

/// Structured audit event.
///
/// Build with the fluent setters, then call `.log()` to emit the event under
/// the `audit` tracing target.
#[derive(Debug, Serialize)]
pub struct AuditEvent {
    /// Actor who performed the action, when known
    pub actor: Option<String>,
    /// Action performed (e.g., "project.create", "project.delete")
    pub action: String,
    /// Resource affected (e.g., "project:0193...")
    pub resource: Option<String>,
    /// Outcome of the action
    pub outcome: AuditOutcome,
    /// Client IP address
    pub ip_address: Option<String>,
    /// User agent string
    pub user_agent: Option<String>,
    /// When the event occurred
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    /// Additional details about the event
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        actor: Option<String>,
        action: impl Into<String>,
        resource: Option<String>,
        outcome: AuditOutcome,
    ) -> Self {
        Self {
            actor,
            action: action.into(),
            resource,
            outcome,
            ip_address: None,
            user_agent: None,
            timestamp: Utc::now(),
            details: None,
        }
    }

    pub fn with_ip(mut self, ip: Option<String>) -> Self {
        self.ip_address = ip;
        self
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit the event to the audit log.
    pub fn log(self) {
        tracing::info!(
            target: "audit",
            actor = self.actor.as_deref().unwrap_or("anonymous"),
            action = %self.action,
            resource = self.resource.as_deref().unwrap_or("-"),
            outcome = ?self.outcome,
            ip = self.ip_address.as_deref().unwrap_or("-"),
            user_agent = self.user_agent.as_deref().unwrap_or("-"),
            details = %self
                .details
                .as_ref()
                .map(|d| d.to_string())
                .unwrap_or_default(),
            "audit event"
        );
    }
}

/// Extract the client IP from `x-forwarded-for` or `x-real-ip` headers.
pub fn extract_ip_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string())
        })
}

/// Extract the user agent string from request headers.
pub fn extract_user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}
