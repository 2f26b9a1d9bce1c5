//! Session Gate
//!
//! The signed-in user, if any, loaded from persisted storage at startup and
//! cleared on logout. The session is passed around explicitly; nothing here
//! reads storage behind the caller's back.
//!
//! `require_admin` only decides what the UI shows. The catalog service must
//! enforce its own authorization.

use log::{debug, info, warn};

use crate::api::AuthResponse;
use crate::domain::User;
use crate::error::Result;
use crate::notice::Notice;
use crate::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};

/// Why the admin screen was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenied {
    NotSignedIn,
    NotAdmin,
}

impl AccessDenied {
    pub fn notice(&self) -> Notice {
        let description = match self {
            AccessDenied::NotSignedIn => "Sign in with an administrator account",
            AccessDenied::NotAdmin => "You do not have administrator rights",
        };
        Notice::destructive("Access denied", description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Logged-out session
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Restore the session from storage. Missing or unreadable data means logged out.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(raw) = store.get(USER_KEY) else {
            debug!("No persisted user, starting logged out");
            return Self::anonymous();
        };
        match serde_json::from_str::<Option<User>>(&raw) {
            Ok(user) => {
                if let Some(u) = &user {
                    debug!("Restored session for user {}", u.id);
                }
                Self { user }
            }
            Err(e) => {
                warn!("Ignoring unreadable persisted user: {}", e);
                Self::anonymous()
            }
        }
    }

    /// Persist a successful register/login response and adopt its user
    pub fn establish(&mut self, store: &impl KeyValueStore, auth: &AuthResponse) -> Result<()> {
        let user_json = serde_json::to_string(&auth.user)?;
        store.set(USER_KEY, &user_json)?;
        if let Err(e) = store.set(TOKEN_KEY, &auth.token) {
            // a user without a token must not come back on the next load
            if let Err(e) = store.remove(USER_KEY) {
                warn!("Could not roll back '{}': {}", USER_KEY, e);
            }
            return Err(e);
        }
        info!("Signed in as user {}", auth.user.id);
        self.user = Some(auth.user.clone());
        Ok(())
    }

    /// Clear persisted credentials and forget the user. Never fails.
    pub fn logout(&mut self, store: &impl KeyValueStore) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = store.remove(key) {
                warn!("Could not clear '{}' from storage: {}", key, e);
            }
        }
        if let Some(user) = self.user.take() {
            info!("User {} signed out", user.id);
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    /// Gate for the admin screen
    pub fn require_admin(&self) -> std::result::Result<&User, AccessDenied> {
        match &self.user {
            None => Err(AccessDenied::NotSignedIn),
            Some(user) if !user.is_admin => Err(AccessDenied::NotAdmin),
            Some(user) => Ok(user),
        }
    }
}
