use std::sync::Arc;

use async_trait::async_trait;

use crate::ContactFormData;

/// Delivery of a contact submission failed. The reason is kept for logs only; every failure
/// is reported to the visitor the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("submission failed: {reason}")]
pub struct SubmissionFailed {
    reason: String,
}

impl SubmissionFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// External service that delivers the form contents by email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, data: &ContactFormData) -> Result<(), SubmissionFailed>;
}

#[async_trait]
impl<T: EmailSender + ?Sized> EmailSender for Arc<T> {
    async fn send(&self, data: &ContactFormData) -> Result<(), SubmissionFailed> {
        (**self).send(data).await
    }
}
