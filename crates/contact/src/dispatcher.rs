use std::{sync::Arc, time::Duration};

use strum::{AsRefStr, Display};

use crate::{ContactPage, EmailSender};

/// How long a notification stays on screen after a submission.
pub const NOTICE_DURATION: Duration = Duration::from_secs(4);

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum SubmitOutcome {
    /// Required fields are missing, nothing was sent.
    Invalid,
    /// Another submission of the same page is still running, nothing was sent.
    InProgress,
    Delivered,
    Failed,
}

impl SubmitOutcome {
    pub fn was_dispatched(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered | SubmitOutcome::Failed)
    }
}

#[derive(Clone)]
pub struct Dispatcher {
    sender: Arc<dyn EmailSender>,
    notice_duration: Duration,
}

impl Dispatcher {
    pub fn new(sender: Arc<dyn EmailSender>) -> Self {
        Self {
            sender,
            notice_duration: NOTICE_DURATION,
        }
    }

    /// Sends the page's form through the email service, at most once per call.
    ///
    /// The form lock is released while the service is called, so a second submission of the
    /// same page sees it as in progress.
    pub async fn submit(&self, page: &Arc<ContactPage>) -> SubmitOutcome {
        let payload = {
            let mut form = page.form.lock().await;
            if form.is_submitting() {
                return SubmitOutcome::InProgress;
            }

            match form.begin_submit() {
                Some(payload) => payload,
                None => return SubmitOutcome::Invalid,
            }
        };

        page.cancel_hide().await;

        let result = self.sender.send(&payload).await;
        let outcome = match &result {
            Ok(_) => {
                tracing::info!(subject = %payload.subject, "contact form delivered");
                SubmitOutcome::Delivered
            }
            Err(err) => {
                tracing::warn!(reason = err.reason(), "contact form delivery failed");
                SubmitOutcome::Failed
            }
        };

        page.form.lock().await.complete(&result);
        page.schedule_hide(self.notice_duration).await;

        outcome
    }
}
