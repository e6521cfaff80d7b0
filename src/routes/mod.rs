use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
};
use dentalcare_contact::Dispatcher;

use crate::{
    session::Sessions,
    template::{NotFoundTemplate, current_year, render_with_status},
};

mod assets;
mod contact;
mod health;

pub use assets::AssetsService;
pub use contact::{ContactSubmitTemplate, ContactTemplate, SubjectOption};

#[derive(Clone)]
pub struct AppState {
    pub sessions: Sessions,
    pub dispatcher: Dispatcher,
}

pub async fn fallback() -> impl IntoResponse {
    render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            year: current_year(),
        },
    )
}

async fn index() -> Redirect {
    Redirect::to("/contact")
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/contact/field", post(contact::field))
        .route("/contact/notification/dismiss", post(contact::dismiss))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
