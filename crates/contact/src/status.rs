use strum::{AsRefStr, Display};

pub const SUCCESS_MESSAGE: &str = "Email enviado com sucesso! Entraremos em contato em breve.";
pub const ERROR_MESSAGE: &str =
    "Erro ao enviar email. Tente novamente ou entre em contato por outro canal.";

/// Outcome of the last submission attempt.
#[derive(Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message telling the visitor how the submission went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
}

impl Notification {
    pub fn from_status(status: SubmissionStatus) -> Option<Self> {
        let kind = match status {
            SubmissionStatus::Idle => return None,
            SubmissionStatus::Success => NotificationKind::Success,
            SubmissionStatus::Error => NotificationKind::Error,
        };

        Some(Self { kind })
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }

    pub fn message(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => SUCCESS_MESSAGE,
            NotificationKind::Error => ERROR_MESSAGE,
        }
    }
}
