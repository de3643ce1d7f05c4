// Intake form: blank form rendering, submission validation and append.

pub mod handlers;
pub mod validation;
