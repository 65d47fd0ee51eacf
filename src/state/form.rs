//! Submission state and validation shared by the auth and board forms.
//!
//! DESIGN
//! ======
//! Validation runs before any request is made; a `FormError` blocks
//! submission. Server failures settle into `FormStatus` so the page only has
//! to render `loading` and `error`.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::error::ApiError;

/// Client-side validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A required field is blank after trimming.
    #[error("{0} is required.")]
    Required(&'static str),
}

/// Trim `value` and reject it when blank.
///
/// # Errors
///
/// Returns `FormError::Required(field)` for blank input.
pub fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Trim `value`, mapping blank input to `None`.
#[must_use]
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Loading flag and error line for one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub loading: bool,
    pub error: Option<String>,
}

impl FormStatus {
    /// Mark a submission in flight. Returns `false` if one already is.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Record a validation failure without starting a request.
    pub fn reject(&mut self, error: FormError) {
        self.loading = false;
        self.error = Some(error.to_string());
    }

    /// Settle a finished request. On failure the server message (or
    /// `fallback`) becomes the error line and the value is dropped.
    pub fn settle<T>(&mut self, result: Result<T, ApiError>, fallback: &str) -> Option<T> {
        self.loading = false;
        match result {
            Ok(value) => {
                self.error = None;
                Some(value)
            }
            Err(err) => {
                self.error = Some(err.user_message(fallback));
                None
            }
        }
    }

    /// Finish a board mutation whose failure is only logged. The loading
    /// flag resets; the error line is left alone.
    pub fn finish<T>(&mut self, result: Result<T, ApiError>) -> Option<T> {
        self.loading = false;
        result.ok()
    }
}
