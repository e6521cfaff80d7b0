use axum::http::{StatusCode, header};
use dentalcare_contact::{ERROR_MESSAGE, SUCCESS_MESSAGE};

mod helpers;

const ANA: [(&str, &str); 5] = [
    ("name", "Ana"),
    ("email", "ana@x.com"),
    ("phone", ""),
    ("subject", ""),
    ("message", "Oi"),
];

#[tokio::test]
async fn test_contact_page_renders_clinic_information() {
    let app = helpers::create_test_app(false);

    let response = app.get("/contact", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(helpers::session_cookie(&response).is_some());

    let body = helpers::body_string(response).await;
    assert!(body.contains("Contato conosco"));
    assert!(body.contains("(11) 99999-9999"));
    assert!(body.contains("contato@dentalcare.com"));
    assert!(body.contains("Rua das Flores, 123 - Vila Madalena, São Paulo/SP"));
    assert!(body.contains("Segunda a Sexta: 8h às 18h"));
    assert!(body.contains("Como agendar uma consulta?"));
    assert!(body.contains("Agendamento de Consulta"));
    assert!(body.contains(r#"id="contact-submit" class="submit" type="submit" disabled"#));
    assert!(!body.contains("notification-message"));
}

#[tokio::test]
async fn test_field_updates_toggle_submit_button() {
    let app = helpers::create_test_app(false);
    let cookie = app.open_session().await;

    let mut last = String::new();
    for (field, value) in [("name", "Ana"), ("email", "ana@x.com")] {
        let response = app
            .post_form(
                "/contact/field",
                Some(&cookie),
                &[("field", field), ("value", value)],
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        last = helpers::body_string(response).await;
        assert!(last.contains("disabled"));
    }
    assert!(last.contains("Enviar Mensagem"));

    let response = app
        .post_form(
            "/contact/field",
            Some(&cookie),
            &[("field", "message"), ("value", "Oi")],
        )
        .await;
    let body = helpers::body_string(response).await;
    assert!(!body.contains("disabled"));

    let page = helpers::body_string(app.get("/contact", Some(&cookie)).await).await;
    assert!(page.contains(r#"value="Ana""#));
    assert!(page.contains(r#"value="ana@x.com""#));
    assert!(page.contains(">Oi</textarea>"));
}

#[tokio::test]
async fn test_unknown_field_is_rejected() {
    let app = helpers::create_test_app(false);
    let cookie = app.open_session().await;

    let response = app
        .post_form(
            "/contact/field",
            Some(&cookie),
            &[("field", "address"), ("value", "Rua")],
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_successful_submit_resets_form() {
    let app = helpers::create_test_app(false);
    let cookie = app.open_session().await;

    let response = app.post_form("/contact", Some(&cookie), &ANA).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("x-submit-outcome")
            .and_then(|v| v.to_str().ok()),
        Some("delivered")
    );

    let body = helpers::body_string(response).await;
    assert!(body.contains(SUCCESS_MESSAGE));
    assert!(body.contains(r#"data-auto-hide="4000""#));
    assert!(!body.contains(r#"value="Ana""#));
    assert!(body.contains(r#"id="name" name="name" value="""#));
    assert_eq!(app.sender.calls(), 1);
}

#[tokio::test]
async fn test_failed_submit_keeps_typed_values() {
    let app = helpers::create_test_app(true);
    let cookie = app.open_session().await;

    let mut form = ANA.to_vec();
    form[3] = ("subject", "orcamento");

    let response = app.post_form("/contact", Some(&cookie), &form).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = helpers::body_string(response).await;
    assert!(body.contains(ERROR_MESSAGE));
    assert!(body.contains(r#"value="Ana""#));
    assert!(body.contains(r#"value="ana@x.com""#));
    assert!(body.contains(r#"value="orcamento" selected"#));
    assert!(body.contains(">Oi</textarea>"));
    assert_eq!(app.sender.calls(), 1);
}

#[tokio::test]
async fn test_invalid_submit_is_not_dispatched() {
    let app = helpers::create_test_app(false);
    let cookie = app.open_session().await;

    let mut form = ANA.to_vec();
    form[1] = ("email", "");

    let response = app.post_form("/contact", Some(&cookie), &form).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = helpers::body_string(response).await;
    assert!(!body.contains(SUCCESS_MESSAGE));
    assert!(!body.contains(ERROR_MESSAGE));
    assert_eq!(app.sender.calls(), 0);
}

#[tokio::test]
async fn test_dismiss_hides_notification() {
    let app = helpers::create_test_app(true);
    let cookie = app.open_session().await;
    app.post_form("/contact", Some(&cookie), &ANA).await;

    let response = app
        .post_form(
            "/contact/notification/dismiss",
            Some(&cookie),
            &Vec::<(&str, &str)>::new(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = helpers::body_string(app.get("/contact", Some(&cookie)).await).await;
    assert!(!body.contains(ERROR_MESSAGE));
    assert!(body.contains(r#"value="Ana""#));
}

#[tokio::test]
async fn test_visitors_do_not_share_forms() {
    let app = helpers::create_test_app(true);
    let first = app.open_session().await;
    let second = app.open_session().await;

    app.post_form("/contact", Some(&first), &ANA).await;

    let body = helpers::body_string(app.get("/contact", Some(&second)).await).await;
    assert!(!body.contains(r#"value="Ana""#));
    assert!(!body.contains(ERROR_MESSAGE));
    assert_eq!(app.sessions.len().await, 2);
}

#[tokio::test]
async fn test_index_redirects_to_contact() {
    let app = helpers::create_test_app(false);

    let response = app.get("/", None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/contact")
    );
}

#[tokio::test]
async fn test_health_static_and_not_found() {
    let app = helpers::create_test_app(false);

    let response = app.get("/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(helpers::body_string(response).await, r#"{"status":"ok"}"#);

    let response = app.get("/static/css/contact.css", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("text/css")
    );

    let response = app.get("/static/js/contact.js", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get("/agendamentos", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(helpers::body_string(response).await.contains("Página não encontrada"));
}
