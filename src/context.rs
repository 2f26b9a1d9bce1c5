//! Application Context
//!
//! Session, notices and service endpoints, provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use nursery_core::api::{AuthResponse, HttpClient};
use nursery_core::notice::Notice;
use nursery_core::session::Session;
use nursery_core::{ApiConfig, Error, Result};

use crate::storage::BrowserStorage;

/// How long a notice stays on screen
const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in user, restored from local storage at startup
    pub session: RwSignal<Session>,
    /// Visible notices with their ids
    pub notices: RwSignal<Vec<(u32, Notice)>>,
    next_notice_id: StoredValue<u32>,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            session: RwSignal::new(Session::load(&BrowserStorage)),
            notices: RwSignal::new(Vec::new()),
            next_notice_id: StoredValue::new(0),
            config: StoredValue::new(config),
        }
    }

    /// Client for the catalog and auth services
    pub fn client(&self) -> HttpClient {
        HttpClient::new(self.config.get_value())
    }

    /// Show a notice, dismissing it after a few seconds
    pub fn notify(&self, notice: Notice) {
        let id = self.next_notice_id.get_value();
        self.next_notice_id.set_value(id.wrapping_add(1));
        self.notices.update(|list| list.push((id, notice)));

        let notices = self.notices;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            notices.try_update(|list| list.retain(|(nid, _)| *nid != id));
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.notices.update(|list| list.retain(|(nid, _)| *nid != id));
    }

    /// Persist a register/login answer and switch to that user.
    /// On error the session stays logged out.
    pub fn establish(&self, auth: &AuthResponse) -> Result<()> {
        self.session
            .try_update(|s| s.establish(&BrowserStorage, auth))
            .unwrap_or_else(|| Err(Error::Storage("session is no longer available".to_string())))
    }

    pub fn logout(&self) {
        self.session.update(|s| s.logout(&BrowserStorage));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
