//! Log line prefix and key/value logging macros.
//!
//! Store and councillor events are written as `[session=..] [complaint=..]
//! EVENT_NAME key=value ...`, so one citizen's report can be followed from
//! submission through repair across interleaved sessions.

use std::fmt;

/// Who is acting and, once known, which complaint the line is about.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub session_id: String,
    pub complaint_id: Option<u64>,
}

impl LogContext {
    pub fn new(session_id: &str) -> Self {
        Self {
            session_id: session_id.to_string(),
            complaint_id: None,
        }
    }

    /// Same session, narrowed to one complaint.
    pub fn with_complaint(&self, complaint_id: u64) -> Self {
        Self {
            session_id: self.session_id.clone(),
            complaint_id: Some(complaint_id),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.complaint_id {
            Some(id) => write!(f, "[session={}] [complaint={}]", self.session_id, id),
            None => write!(f, "[session={}]", self.session_id),
        }
    }
}

/// `info` event: `log_info!(ctx, "EVENT", key = value, ...)`.
#[macro_export]
macro_rules! log_info {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::info!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*), $($value),*)
        );
    };
}

/// `warn` event; same shape as [`log_info!`].
#[macro_export]
macro_rules! log_warn {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::warn!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*), $($value),*)
        );
    };
}

/// `error` event; same shape as [`log_info!`].
#[macro_export]
macro_rules! log_error {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::error!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*), $($value),*)
        );
    };
}

/// `debug` event; same shape as [`log_info!`].
#[macro_export]
macro_rules! log_debug {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::debug!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*), $($value),*)
        );
    };
}
