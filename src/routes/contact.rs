use std::str::FromStr;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use dentalcare_contact::{
    ContactForm, ContactFormData, Field, NOTICE_DURATION, Notification, Subject, SubmitOutcome,
};
use serde::Deserialize;
use strum::VariantArray;

use crate::{
    clinic::{self, ContactMethod, Faq, Highlight},
    error::AppError,
    routes::AppState,
    template::{current_year, render, render_with_status},
};

pub struct SubjectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub form: ContactFormData,
    pub subjects: Vec<SubjectOption>,
    pub can_submit: bool,
    pub submitting: bool,
    pub notification: Option<Notification>,
    pub notice_ms: u64,
    pub highlights: &'static [Highlight],
    pub methods: &'static [ContactMethod],
    pub faqs: &'static [Faq],
    pub address: &'static str,
    pub year: i32,
}

impl From<ContactForm> for ContactTemplate {
    fn from(form: ContactForm) -> Self {
        let subjects = Subject::VARIANTS
            .iter()
            .map(|subject| SubjectOption {
                value: subject.value(),
                label: subject.label(),
                selected: form.data().subject == subject.value(),
            })
            .collect();

        Self {
            subjects,
            can_submit: form.can_submit(),
            submitting: form.is_submitting(),
            notification: form.notification(),
            notice_ms: NOTICE_DURATION.as_millis() as u64,
            highlights: clinic::HIGHLIGHTS,
            methods: clinic::CONTACT_METHODS,
            faqs: clinic::FAQS,
            address: clinic::ADDRESS,
            year: current_year(),
            form: form.data().clone(),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact-submit.html")]
pub struct ContactSubmitTemplate {
    pub can_submit: bool,
    pub submitting: bool,
}

pub async fn page(State(app_state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, page) = app_state.sessions.resolve(jar).await;
    let form = page.snapshot().await;

    (jar, render(ContactTemplate::from(form)))
}

pub async fn action(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<ContactFormData>,
) -> impl IntoResponse {
    let (jar, page) = app_state.sessions.resolve(jar).await;
    page.fill(&input).await;

    let outcome = app_state.dispatcher.submit(&page).await;
    let status = match outcome {
        SubmitOutcome::Delivered | SubmitOutcome::Failed => StatusCode::OK,
        SubmitOutcome::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::InProgress => StatusCode::CONFLICT,
    };

    let form = page.snapshot().await;

    (
        jar,
        [("x-submit-outcome", outcome.as_ref().to_owned())],
        render_with_status(status, ContactTemplate::from(form)),
    )
}

#[derive(Deserialize)]
pub struct FieldInput {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

pub async fn field(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<FieldInput>,
) -> Result<Response, AppError> {
    let field =
        Field::from_str(&input.field).map_err(|_| AppError::UnknownField(input.field.to_owned()))?;

    let (jar, page) = app_state.sessions.resolve(jar).await;
    let form = page.update(field, input.value).await;

    let html = askama::Template::render(&ContactSubmitTemplate {
        can_submit: form.can_submit(),
        submitting: form.is_submitting(),
    })?;

    Ok((jar, axum::response::Html(html)).into_response())
}

pub async fn dismiss(State(app_state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, page) = app_state.sessions.resolve(jar).await;
    page.dismiss_notification().await;

    (jar, StatusCode::NO_CONTENT)
}
