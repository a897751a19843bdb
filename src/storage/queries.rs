//! Read-side helpers over a complaint list.
//!
//! Dashboards and the councillor view render filtered slices of the list the
//! store returns; these helpers never touch the backend.

use serde::Serialize;

use super::models::{Complaint, ComplaintStatus, District};

/// Per-status counts for the councillor header cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusSummary {
    pub fn count(&self, status: ComplaintStatus) -> usize {
        match status {
            ComplaintStatus::Pending => self.pending,
            ComplaintStatus::InProgress => self.in_progress,
            ComplaintStatus::Completed => self.completed,
        }
    }
}

/// Count complaints per status.
///
/// Accepts the full list or any filtered view of it, e.g.
/// `status_summary(filter_by_user(&all, user))` for one citizen's cards.
pub fn status_summary<'a, I>(complaints: I) -> StatusSummary
where
    I: IntoIterator<Item = &'a Complaint>,
{
    complaints
        .into_iter()
        .fold(StatusSummary::default(), |mut summary, c| {
            summary.total += 1;
            match c.status {
                ComplaintStatus::Pending => summary.pending += 1,
                ComplaintStatus::InProgress => summary.in_progress += 1,
                ComplaintStatus::Completed => summary.completed += 1,
            }
            summary
        })
}

pub fn find_by_id(complaints: &[Complaint], id: u64) -> Option<&Complaint> {
    complaints.iter().find(|c| c.id == id)
}

pub fn filter_by_status(complaints: &[Complaint], status: ComplaintStatus) -> Vec<&Complaint> {
    complaints.iter().filter(|c| c.status == status).collect()
}

pub fn filter_by_district(complaints: &[Complaint], district: District) -> Vec<&Complaint> {
    complaints.iter().filter(|c| c.district == district).collect()
}

/// Complaints submitted by `user` (exact match).
pub fn filter_by_user<'a>(complaints: &'a [Complaint], user: &str) -> Vec<&'a Complaint> {
    complaints.iter().filter(|c| c.user == user).collect()
}
