//! Complaint records and their enumerated fields.
//!
//! These models define the JSON layout of the persistence slot. Field names
//! and string forms match data written by earlier versions of the app.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lifecycle state of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Completed,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 3] = [
        ComplaintStatus::Pending,
        ComplaintStatus::InProgress,
        ComplaintStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::InProgress => "in_progress",
            ComplaintStatus::Completed => "completed",
        }
    }

    /// Human-readable label shown on dashboards.
    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Completed => "Completed",
        }
    }

    /// Position in the pending → in_progress → completed sequence.
    pub fn ordinal(&self) -> u8 {
        match self {
            ComplaintStatus::Pending => 0,
            ComplaintStatus::InProgress => 1,
            ComplaintStatus::Completed => 2,
        }
    }

    pub fn next(&self) -> Option<ComplaintStatus> {
        match self {
            ComplaintStatus::Pending => Some(ComplaintStatus::InProgress),
            ComplaintStatus::InProgress => Some(ComplaintStatus::Completed),
            ComplaintStatus::Completed => None,
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reported severity of a pothole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Severity::ALL
            .iter()
            .copied()
            .find(|sev| sev.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownSeverity(s.to_string()))
    }
}

/// Administrative region a complaint is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum District {
    Chennai,
    Coimbatore,
    Madurai,
    Salem,
    Tiruchirappalli,
    Tirunelveli,
    Erode,
    Vellore,
}

impl District {
    pub const ALL: [District; 8] = [
        District::Chennai,
        District::Coimbatore,
        District::Madurai,
        District::Salem,
        District::Tiruchirappalli,
        District::Tirunelveli,
        District::Erode,
        District::Vellore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            District::Chennai => "Chennai",
            District::Coimbatore => "Coimbatore",
            District::Madurai => "Madurai",
            District::Salem => "Salem",
            District::Tiruchirappalli => "Tiruchirappalli",
            District::Tirunelveli => "Tirunelveli",
            District::Erode => "Erode",
            District::Vellore => "Vellore",
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for District {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        District::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownDistrict(s.to_string()))
    }
}

/// A stored pothole complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: u64,
    pub user: String,
    pub location: String,
    pub district: District,
    pub severity: Severity,
    pub status: ComplaintStatus,
    pub date: NaiveDate,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Caller-supplied part of a new complaint.
///
/// The store fills in `id`, `user`, `status` and `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintDraft {
    pub location: String,
    pub district: District,
    pub severity: Severity,
    pub description: String,
    pub image: Option<String>,
}

impl ComplaintDraft {
    pub fn new(
        location: impl Into<String>,
        district: District,
        severity: Severity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            district,
            severity,
            description: description.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
