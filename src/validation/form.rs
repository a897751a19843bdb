//! Report form validation.
//!
//! Turns the raw strings of a report form into a [`ComplaintDraft`], or a
//! field-level error. Nothing here touches the store.

use crate::error::ValidationError;
use crate::storage::models::{ComplaintDraft, District, Severity};

use super::image::validate_image;

/// Raw report form as submitted by a citizen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub address: String,
    pub district: String,
    pub severity: String,
    pub description: String,
    pub image: Option<String>,
}

/// Validate a form.
///
/// All missing required fields are reported together.
pub fn validate_form(
    form: &SubmissionForm,
    max_image_bytes: usize,
) -> Result<ComplaintDraft, ValidationError> {
    let required = [
        ("description", &form.description),
        ("district", &form.district),
        ("severity", &form.severity),
        ("address", &form.address),
    ];
    let missing: Vec<&'static str> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let district: District = form.district.parse()?;
    let severity: Severity = form.severity.parse()?;

    let image = match form.image.as_deref().map(str::trim) {
        Some(uri) if !uri.is_empty() => {
            validate_image(uri, max_image_bytes)?;
            Some(uri.to_string())
        }
        _ => None,
    };

    Ok(ComplaintDraft {
        location: form.address.trim().to_string(),
        district,
        severity,
        description: form.description.trim().to_string(),
        image,
    })
}
