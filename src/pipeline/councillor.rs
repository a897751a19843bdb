//! Councillor actions.
//!
//! Start a repair (pending → in_progress) or mark it complete
//! (→ completed). Completion produces a [`RepairCompleted`] notice for
//! whatever credits the complainant; the store itself keeps no points.

use serde::Serialize;

use crate::error::StoreError;
use crate::log_info;
use crate::storage::models::{Complaint, ComplaintStatus, District};
use crate::storage::queries::find_by_id;
use crate::storage::store::ComplaintStore;

use super::context::SessionContext;

/// A complaint that moved into `completed` during a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairCompleted {
    pub complaint_id: u64,
    pub user: String,
    pub district: District,
}

/// Result of a councillor action.
#[derive(Debug, Clone)]
pub struct RepairOutcome {
    /// The whole collection after the update, for re-rendering.
    pub complaints: Vec<Complaint>,
    pub completed: Option<RepairCompleted>,
}

/// Move a complaint to `in_progress`.
pub fn start_repair(
    store: &ComplaintStore,
    ctx: &SessionContext,
    id: u64,
) -> Result<Vec<Complaint>, StoreError> {
    let complaints = store.update_status(id, ComplaintStatus::InProgress)?;
    log_info!(
        ctx.complaint_context(id),
        "REPAIR_STARTED",
        found = find_by_id(&complaints, id).is_some(),
    );
    Ok(complaints)
}

/// Move a complaint to `completed`.
///
/// `completed` is set only when the complaint exists and was not already
/// completed before this call.
pub fn mark_complete(
    store: &ComplaintStore,
    ctx: &SessionContext,
    id: u64,
) -> Result<RepairOutcome, StoreError> {
    let update = store.apply_status(id, ComplaintStatus::Completed)?;
    let complaints = update.complaints;

    let completed = match (update.previous, find_by_id(&complaints, id)) {
        (Some(before), Some(after))
            if before != ComplaintStatus::Completed
                && after.status == ComplaintStatus::Completed =>
        {
            Some(RepairCompleted {
                complaint_id: after.id,
                user: after.user.clone(),
                district: after.district,
            })
        }
        _ => None,
    };

    log_info!(
        ctx.complaint_context(id),
        "REPAIR_COMPLETED",
        newly_completed = completed.is_some(),
    );

    Ok(RepairOutcome {
        complaints,
        completed,
    })
}
