use tracing::{debug, info, warn};

use super::{ContactForm, Field, Transport, TransportError, ValidationErrors, validate};

pub const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! I will get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "There was an error sending your message. Please try again later.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    NotSubmitted,
    Pending,
    Succeeded { message: String },
    Failed { message: String },
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    /// Banner text, once a submission has finished.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Succeeded { message } | SubmissionStatus::Failed { message } => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ValidationErrors),
    #[error("a submission is already in flight")]
    AlreadyPending,
}

/// One visitor's contact form: contents, field errors and submission status.
#[derive(Debug, Clone, Default)]
pub struct ContactSession {
    form: ContactForm,
    errors: ValidationErrors,
    status: SubmissionStatus,
}

impl ContactSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Edit a field. Its stale error, if any, is dropped.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.remove(field);
    }

    /// Recompute every field error from scratch.
    pub fn validate(&mut self) -> &ValidationErrors {
        self.errors = validate(&self.form);
        &self.errors
    }

    /// Validate and move to `Pending`, returning the form to dispatch.
    ///
    /// Rejected without touching any state while a submission is pending.
    /// On invalid input only the field errors change.
    pub fn begin_submit(&mut self) -> Result<ContactForm, SubmitError> {
        if self.status.is_pending() {
            debug!("ignoring re-entrant submit");
            return Err(SubmitError::AlreadyPending);
        }
        if !self.validate().is_empty() {
            debug!(invalid = self.errors.len(), "contact form rejected");
            return Err(SubmitError::Invalid(self.errors.clone()));
        }
        self.status = SubmissionStatus::Pending;
        Ok(self.form.clone())
    }

    /// Record the transport outcome of the pending submission.
    pub fn complete(&mut self, outcome: Result<(), TransportError>) {
        if !self.status.is_pending() {
            warn!("submission outcome arrived with nothing pending, ignoring");
            return;
        }
        match outcome {
            Ok(()) => {
                info!("contact message sent");
                self.form.clear();
                self.status = SubmissionStatus::Succeeded {
                    message: SUCCESS_MESSAGE.to_string(),
                };
            }
            Err(err) => {
                warn!(error = %err, "contact message failed");
                self.status = SubmissionStatus::Failed {
                    message: FAILURE_MESSAGE.to_string(),
                };
            }
        }
    }

    pub async fn submit<T: Transport + ?Sized>(
        &mut self,
        transport: &T,
    ) -> Result<&SubmissionStatus, SubmitError> {
        let form = self.begin_submit()?;
        let outcome = transport.send(&form).await;
        self.complete(outcome);
        Ok(&self.status)
    }
}
