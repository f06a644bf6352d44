//! Result contract for form and newsletter submissions
//!
//! Network clients live outside this crate. They hand views a
//! [`SubmissionOutcome`] instead of failing, and views track it with a
//! [`FormStatus`].

use crate::error::SubmissionError;
use crate::i18n;
use crate::state::Locale;

/// Acknowledgement from a downstream service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Identifier assigned by the service, if any
    pub reference: Option<String>,
}

/// What a submission client returns
pub type SubmissionOutcome = Result<SubmissionReceipt, SubmissionError>;

/// Which form a status line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Newsletter,
}

impl FormKind {
    fn namespace(self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Newsletter => "newsletter",
        }
    }
}

/// View-side state of a form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(SubmissionReceipt),
    Failed(SubmissionError),
}

impl FormStatus {
    /// Mark a submission as in flight
    pub fn start(&mut self) {
        *self = FormStatus::Submitting;
    }

    /// Record the outcome of the submission in flight
    pub fn apply(&mut self, outcome: SubmissionOutcome) {
        *self = match outcome {
            Ok(receipt) => FormStatus::Succeeded(receipt),
            Err(e) => {
                log::warn!("Form submission failed: {}", e);
                FormStatus::Failed(e)
            }
        };
    }

    /// Whether the submit button should be disabled
    pub fn is_busy(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }

    /// Localized status line for the form, if one should be shown
    pub fn message(&self, kind: FormKind, locale: Locale) -> Option<&'static str> {
        let key = match (self, kind) {
            (FormStatus::Idle, _) => return None,
            (FormStatus::Submitting, FormKind::Contact) => "sending",
            (FormStatus::Submitting, FormKind::Newsletter) => return None,
            (FormStatus::Succeeded(_), _) => "success",
            (FormStatus::Failed(_), _) => "error",
        };
        i18n::lookup(locale, kind.namespace(), key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_flow() {
        let mut status = FormStatus::default();
        assert_eq!(status.message(FormKind::Contact, Locale::En), None);

        status.start();
        assert!(status.is_busy());
        assert_eq!(status.message(FormKind::Contact, Locale::En), Some("Sending..."));

        status.apply(Ok(SubmissionReceipt { reference: None }));
        assert!(!status.is_busy());
        assert_eq!(
            status.message(FormKind::Newsletter, Locale::En),
            Some("You're subscribed. Welcome aboard!")
        );
    }

    #[test]
    fn test_failure_is_a_state_not_a_panic() {
        let mut status = FormStatus::Submitting;
        status.apply(Err(SubmissionError::Network("timeout".to_string())));

        assert!(matches!(status, FormStatus::Failed(SubmissionError::Network(_))));
        assert_eq!(
            status.message(FormKind::Contact, Locale::Tr),
            Some("Bir şeyler ters gitti. Lütfen tekrar deneyin veya bize doğrudan e-posta gönderin.")
        );
    }
}
