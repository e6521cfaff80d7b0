pub mod contact;
mod service;

pub use contact::SmtpSender;
pub use service::*;
