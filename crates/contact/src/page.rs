use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use strum::VariantArray;
use tokio::{sync::Mutex, task::JoinHandle};

use crate::{ContactForm, ContactFormData, Field};

/// One visitor's contact page: the form state and the pending notification timer.
///
/// Dropping the page cancels the timer.
#[derive(Debug, Default)]
pub struct ContactPage {
    pub(crate) form: Mutex<ContactForm>,
    notice_timer: Mutex<Option<JoinHandle<()>>>,
}

impl ContactPage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn snapshot(&self) -> ContactForm {
        self.form.lock().await.clone()
    }

    pub async fn update(&self, field: Field, value: impl Into<String>) -> ContactForm {
        let mut form = self.form.lock().await;
        form.update(field, value);
        form.clone()
    }

    /// Copies every field of `data` into the form.
    pub async fn fill(&self, data: &ContactFormData) -> ContactForm {
        let mut form = self.form.lock().await;
        for field in Field::VARIANTS {
            form.update(*field, data.get(*field));
        }
        form.clone()
    }

    pub async fn dismiss_notification(&self) {
        self.cancel_hide().await;
        self.form.lock().await.hide_notification();
    }

    pub(crate) async fn cancel_hide(&self) {
        if let Some(timer) = self.notice_timer.lock().await.take() {
            timer.abort();
        }
    }

    /// Hides the notification once `after` has elapsed, replacing any timer still pending.
    pub(crate) async fn schedule_hide(self: &Arc<Self>, after: Duration) {
        let page: Weak<Self> = Arc::downgrade(self);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(after).await;

            if let Some(page) = page.upgrade() {
                page.form.lock().await.hide_notification();
            }
        });

        if let Some(previous) = self.notice_timer.lock().await.replace(timer) {
            previous.abort();
        }
    }
}

impl Drop for ContactPage {
    fn drop(&mut self) {
        if let Some(timer) = self.notice_timer.get_mut().take() {
            timer.abort();
        }
    }
}
