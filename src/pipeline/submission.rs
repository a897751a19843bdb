//! Report submission flow.
//!
//! Validate the form, then create the complaint. A form that fails
//! validation never reaches the store.

use crate::error::SubmissionError;
use crate::storage::models::Complaint;
use crate::storage::store::ComplaintStore;
use crate::validation::form::{validate_form, SubmissionForm};
use crate::{log_info, log_warn};

use super::context::SessionContext;

/// Submit a pothole report on behalf of the session's user.
///
/// Photos are checked against the store's configured size limit.
pub fn submit_report(
    store: &ComplaintStore,
    ctx: &SessionContext,
    form: &SubmissionForm,
) -> Result<Complaint, SubmissionError> {
    let log_ctx = ctx.log_context();

    let draft = match validate_form(form, store.max_image_bytes()) {
        Ok(draft) => draft,
        Err(e) => {
            log_warn!(log_ctx, "SUBMISSION_REJECTED", reason = e.to_string());
            return Err(e.into());
        }
    };

    let complaint = store.add(draft, ctx.user.as_deref())?;

    log_info!(
        ctx.complaint_context(complaint.id),
        "SUBMISSION_ACCEPTED",
        district = complaint.district.as_str(),
        severity = complaint.severity.as_str(),
    );

    Ok(complaint)
}
