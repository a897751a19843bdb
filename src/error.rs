//! Error types for the complaint store and its consumers.

use thiserror::Error;

use crate::storage::models::ComplaintStatus;

/// Failures originating in the complaint store or its backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("BACKEND/slot {slot}: {source}")]
    Backend {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CORRUPT/slot {slot} does not hold a complaint list: {source}")]
    CorruptSlot {
        slot: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("ENCODE/{0}")]
    Encode(#[from] serde_json::Error),

    #[error("IDS/slot {slot} has no id left above {max_existing}")]
    IdSpaceExhausted { slot: String, max_existing: u64 },

    #[error("TRANSITION/complaint {id} cannot move from {from} to {to}")]
    TransitionRejected {
        id: u64,
        from: ComplaintStatus,
        to: ComplaintStatus,
    },
}

/// Field-level problems with a submitted report form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("unknown district: {0}")]
    UnknownDistrict(String),

    #[error("unknown severity: {0}")]
    UnknownSeverity(String),

    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("image is {size} bytes, limit is {limit}")]
    ImageTooLarge { size: usize, limit: usize },
}

/// Failure of the report submission flow.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Unparsable configuration value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value for {key}: {value:?}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = ValidationError::MissingFields(vec!["address", "severity"]);
        assert_eq!(err.to_string(), "missing required fields: address, severity");
    }

    #[test]
    fn test_transition_rejected_message() {
        let err = StoreError::TransitionRejected {
            id: 7,
            from: ComplaintStatus::Completed,
            to: ComplaintStatus::Pending,
        };
        assert_eq!(
            err.to_string(),
            "TRANSITION/complaint 7 cannot move from completed to pending"
        );
    }

    #[test]
    fn test_submission_error_is_transparent() {
        let err: SubmissionError = ValidationError::UnknownDistrict("Ooty".to_string()).into();
        assert_eq!(err.to_string(), "unknown district: Ooty");
    }
}
