use thiserror::Error;

use crate::models::ApplicationForm;

/// Why a submission was turned away. `Display` is the message shown to the
/// applicant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Please provide a Portfolio link or your Instagram ID.")]
    MissingContact,

    #[error("Please fill name, email and the short note about why you want to join.")]
    MissingRequired,
}

/// Checks an already-trimmed form.
///
/// Contact details are checked before the required text fields, so a form
/// missing both reports the contact problem.
pub fn validate_submission(form: &ApplicationForm) -> Result<(), SubmissionError> {
    if form.portfolio.is_empty() && form.instagram.is_empty() {
        return Err(SubmissionError::MissingContact);
    }
    if form.name.is_empty() || form.email.is_empty() || form.why.is_empty() {
        return Err(SubmissionError::MissingRequired);
    }
    Ok(())
}
