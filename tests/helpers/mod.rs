use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use dentalcare::{AppState, Sessions};
use dentalcare_contact::{ContactFormData, Dispatcher, EmailSender, SubmissionFailed};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[derive(Default)]
pub struct FakeSender {
    fail: bool,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeSender {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailSender for FakeSender {
    async fn send(&self, _data: &ContactFormData) -> Result<(), SubmissionFailed> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(SubmissionFailed::new("service unavailable"));
        }

        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub sender: Arc<FakeSender>,
    pub sessions: Sessions,
}

pub fn create_test_app(fail: bool) -> TestApp {
    let sender = Arc::new(FakeSender {
        fail,
        ..Default::default()
    });
    let sessions = Sessions::new();

    let router = dentalcare::router(AppState {
        sessions: sessions.clone(),
        dispatcher: Dispatcher::new(sender.clone()),
    });

    TestApp {
        router,
        sender,
        sessions,
    }
}

#[allow(dead_code)]
impl TestApp {
    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        self.router
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form<T: serde::Serialize>(
        &self,
        uri: &str,
        cookie: Option<&str>,
        form: &T,
    ) -> Response<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let body = serde_urlencoded::to_string(form).unwrap();

        self.router
            .clone()
            .oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap()
    }

    /// Opens a page and returns the session cookie to send back.
    pub async fn open_session(&self) -> String {
        let response = self.get("/contact", None).await;
        session_cookie(&response).expect("session cookie")
    }
}

#[allow(dead_code)]
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_owned)
}

#[allow(dead_code)]
pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
