use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use dentalcare_contact::{
    ContactFormData, ContactPage, Dispatcher, EmailSender, Field, SubmissionFailed,
};
use tokio::sync::{Mutex, Notify};

/// Sender answering with a fixed result, optionally holding each call until released.
#[derive(Default)]
pub struct FakeSender {
    pub fail: bool,
    pub calls: AtomicUsize,
    pub received: Mutex<Vec<ContactFormData>>,
    gate: Option<Gate>,
}

struct Gate {
    entered: Notify,
    release: Notify,
}

#[allow(dead_code)]
impl FakeSender {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Default::default()
        })
    }

    pub fn gated() -> Arc<Self> {
        Arc::new(Self {
            gate: Some(Gate {
                entered: Notify::new(),
                release: Notify::new(),
            }),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn wait_entered(&self) {
        if let Some(gate) = &self.gate {
            gate.entered.notified().await;
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.release.notify_one();
        }
    }
}

#[async_trait]
impl EmailSender for FakeSender {
    async fn send(&self, data: &ContactFormData) -> Result<(), SubmissionFailed> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().await.push(data.clone());

        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }

        if self.fail {
            return Err(SubmissionFailed::new("service rejected the request"));
        }

        Ok(())
    }
}

#[allow(dead_code)]
pub fn dispatcher(sender: &Arc<FakeSender>) -> Dispatcher {
    Dispatcher::new(sender.clone())
}

#[allow(dead_code)]
pub async fn ana_page() -> Arc<ContactPage> {
    let page = ContactPage::new();
    page.update(Field::Name, "Ana").await;
    page.update(Field::Email, "ana@x.com").await;
    page.update(Field::Message, "Oi").await;
    page
}
