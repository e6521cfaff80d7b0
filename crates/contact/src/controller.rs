use crate::{ContactFormData, Field, Notification, SubmissionFailed, SubmissionStatus, Visibility};

/// Form state of one contact page: the typed values, whether a submission is running and how
/// the last one ended.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContactForm {
    data: ContactFormData,
    status: SubmissionStatus,
    submitting: bool,
    notice: Visibility,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_valid(&self) -> bool {
        self.data.is_valid()
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submitting
    }

    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        self.data = self.data.with_field(field, value);
    }

    /// Marks the form as submitting and returns the values to deliver, or `None` when the form
    /// is invalid or a submission is already running.
    pub fn begin_submit(&mut self) -> Option<ContactFormData> {
        if !self.can_submit() {
            return None;
        }

        self.submitting = true;
        self.status = SubmissionStatus::Idle;

        Some(self.data.clone())
    }

    pub fn complete(&mut self, result: &Result<(), SubmissionFailed>) {
        self.submitting = false;
        self.notice = Visibility::Shown;

        match result {
            Ok(_) => {
                self.status = SubmissionStatus::Success;
                self.data = ContactFormData::default();
            }
            Err(_) => self.status = SubmissionStatus::Error,
        }
    }

    pub fn hide_notification(&mut self) {
        self.notice = Visibility::Hidden;
    }

    pub fn notification(&self) -> Option<Notification> {
        match self.notice {
            Visibility::Shown => Notification::from_status(self.status),
            Visibility::Hidden => None,
        }
    }
}
