//! Speaker enrollment use case

use thiserror::Error;

use crate::domain::enrollment::{EnrollmentForm, EnrollmentFormError};

use super::ports::{BackendError, TranscriptionBackend};

/// Errors from the enrollment use case
#[derive(Debug, Error)]
pub enum EnrollError {
    #[error(transparent)]
    IncompleteForm(#[from] EnrollmentFormError),

    #[error("Error enrolling speakers")]
    Failed(#[source] BackendError),
}

/// Registers named speakers with the service so later transcriptions can
/// identify them.
pub struct EnrollSpeakersUseCase<B: TranscriptionBackend> {
    backend: B,
}

impl<B: TranscriptionBackend> EnrollSpeakersUseCase<B> {
    /// Create a new use case instance
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Validate the form and submit it.
    ///
    /// # Returns
    /// The server's confirmation message
    pub async fn execute(&self, form: &EnrollmentForm) -> Result<String, EnrollError> {
        form.validate()?;
        self.backend.enroll(form).await.map_err(EnrollError::Failed)
    }
}
