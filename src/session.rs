use std::{collections::HashMap, sync::Arc, time::Duration};

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use dentalcare_contact::ContactPage;
use tokio::{sync::RwLock, task::JoinHandle, time::Instant};

pub const SESSION_COOKIE: &str = "dentalcare_session";
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct Entry {
    page: Arc<ContactPage>,
    last_seen: Instant,
}

/// Contact pages of the current visitors, keyed by the session cookie. Kept in memory only.
#[derive(Clone, Default)]
pub struct Sessions {
    pages: Arc<RwLock<HashMap<String, Entry>>>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the visitor's page, opening a new one (and setting the cookie) when the cookie is
    /// missing or its page is gone.
    pub async fn resolve(&self, jar: CookieJar) -> (CookieJar, Arc<ContactPage>) {
        if let Some(id) = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned()) {
            let mut pages = self.pages.write().await;
            if let Some(entry) = pages.get_mut(&id) {
                entry.last_seen = Instant::now();
                return (jar, entry.page.clone());
            }
        }

        let id = ulid::Ulid::new().to_string();
        let page = ContactPage::new();

        self.pages.write().await.insert(
            id.to_owned(),
            Entry {
                page: page.clone(),
                last_seen: Instant::now(),
            },
        );

        let cookie = Cookie::build((SESSION_COOKIE, id))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);

        (jar.add(cookie), page)
    }

    /// Drops pages idle for longer than `idle`, returning how many were removed.
    pub async fn sweep(&self, idle: Duration) -> usize {
        let mut pages = self.pages.write().await;
        let before = pages.len();
        pages.retain(|_, entry| entry.last_seen.elapsed() <= idle);

        before - pages.len()
    }

    pub async fn len(&self) -> usize {
        self.pages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub fn spawn_sweeper(&self, idle: Duration) -> JoinHandle<()> {
        let sessions = self.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(SWEEP_INTERVAL);
            loop {
                interval.tick().await;

                let removed = sessions.sweep(idle).await;
                if removed > 0 {
                    tracing::debug!(removed, "expired contact sessions");
                }
            }
        })
    }
}
