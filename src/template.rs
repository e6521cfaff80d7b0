use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use time::OffsetDateTime;

pub const SERVER_ERROR_MESSAGE: &str = "Ocorreu um erro inesperado, tente novamente mais tarde.";

pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

pub fn render<T: askama::Template>(template: T) -> Response {
    render_with_status(StatusCode::OK, template)
}

pub fn render_with_status<T: askama::Template>(status: StatusCode, template: T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!("Failed to render template. Error: {err}");

            server_error()
        }
    }
}

/// Error page rendered without going through [`render`], so a broken template cannot loop.
pub fn server_error() -> Response {
    let page = ServerTemplate {
        message: SERVER_ERROR_MESSAGE,
        year: current_year(),
    };

    match askama::Template::render(&page) {
        Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to render template. Error: {err}"),
        )
            .into_response(),
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub year: i32,
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate {
    pub message: &'static str,
    pub year: i32,
}
