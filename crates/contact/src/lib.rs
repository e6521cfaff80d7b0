mod controller;
mod dispatcher;
#[cfg(feature = "emailjs")]
pub mod emailjs;
mod form;
mod page;
mod sender;
mod status;
mod types;

pub use controller::*;
pub use dispatcher::*;
pub use form::*;
pub use page::*;
pub use sender::*;
pub use status::*;
pub use types::*;
