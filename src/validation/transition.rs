//! Status transition policy.
//!
//! The councillor flows only ever request the next step in the lifecycle, but
//! the store can be told whether to enforce that.

use crate::storage::models::ComplaintStatus;

/// Which status changes `update_status` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Any status may be written over any other.
    #[default]
    Permissive,
    /// Only a same-status write or the single next step.
    Sequential,
}

impl TransitionPolicy {
    pub fn allows(&self, from: ComplaintStatus, to: ComplaintStatus) -> bool {
        match self {
            TransitionPolicy::Permissive => true,
            TransitionPolicy::Sequential => from == to || from.next() == Some(to),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPolicy::Permissive => "permissive",
            TransitionPolicy::Sequential => "sequential",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "permissive" => Some(TransitionPolicy::Permissive),
            "sequential" | "strict" => Some(TransitionPolicy::Sequential),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ComplaintStatus::*;

    #[test]
    fn test_permissive_allows_everything() {
        let policy = TransitionPolicy::Permissive;
        for from in ComplaintStatus::ALL {
            for to in ComplaintStatus::ALL {
                assert!(policy.allows(from, to), "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn test_sequential_forward_steps() {
        let policy = TransitionPolicy::Sequential;
        assert!(policy.allows(Pending, InProgress));
        assert!(policy.allows(InProgress, Completed));
        assert!(policy.allows(Completed, Completed));
    }

    #[test]
    fn test_sequential_rejects_backward_and_skip() {
        let policy = TransitionPolicy::Sequential;
        assert!(!policy.allows(Completed, Pending));
        assert!(!policy.allows(InProgress, Pending));
        assert!(!policy.allows(Pending, Completed));
    }

    #[test]
    fn test_parse() {
        assert_eq!(TransitionPolicy::parse("Sequential"), Some(TransitionPolicy::Sequential));
        assert_eq!(TransitionPolicy::parse("permissive"), Some(TransitionPolicy::Permissive));
        assert_eq!(TransitionPolicy::parse("lenient"), None);
    }
}
