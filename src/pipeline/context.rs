//! Session context.
//!
//! Carries who is acting and a session id for log correlation.

use uuid::Uuid;

use crate::logging::structured::LogContext;

/// Context for one user session.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub session_id: String,
    /// Authenticated identity, if any. Anonymous sessions submit under the
    /// store's placeholder user.
    pub user: Option<String>,
}

impl SessionContext {
    pub fn new(user: Option<&str>) -> Self {
        let session_id = format!("session-{}", &Uuid::new_v4().simple().to_string()[..8]);

        Self {
            session_id,
            user: user
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(|u| u.to_string()),
        }
    }

    pub fn anonymous() -> Self {
        Self::new(None)
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.session_id)
    }

    /// Log context tagged with a complaint id.
    pub fn complaint_context(&self, complaint_id: u64) -> LogContext {
        self.log_context().with_complaint(complaint_id)
    }
}
