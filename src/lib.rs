pub mod cli;
pub mod clinic;
pub mod config;
pub mod email;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod session;
pub mod template;

pub use config::Config;
pub use routes::{AppState, router};
pub use session::Sessions;
