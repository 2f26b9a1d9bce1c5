//! Remote Services
//!
//! Abstract interfaces for the catalog and auth endpoints, their request
//! types, and the reqwest-backed implementation in `http`.
//!
//! Futures are not `Send`: everything runs on the browser's single thread.

mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Plant, PlantDraft, User};
use crate::error::{Error, Result};

pub use http::HttpClient;

/// Catalog read/write endpoint
#[async_trait(?Send)]
pub trait CatalogService {
    /// All plants, in the service's order
    async fn list(&self) -> Result<Vec<Plant>>;

    /// Create or update a plant. Success means the service accepted it.
    async fn upsert(&self, request: &Upsert) -> Result<()>;
}

/// Registration/login endpoint
#[async_trait(?Send)]
pub trait AuthService {
    async fn register(&self, registration: &Registration) -> Result<AuthResponse>;

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse>;
}

/// A catalog write: create when there is no id yet, update otherwise
#[derive(Debug, Clone, PartialEq)]
pub enum Upsert {
    Create(PlantDraft),
    Update { id: i64, draft: PlantDraft },
}

#[derive(Serialize)]
struct UpdateBody<'a> {
    id: i64,
    #[serde(flatten)]
    draft: &'a PlantDraft,
}

impl Upsert {
    pub fn from_draft(id: Option<i64>, draft: PlantDraft) -> Self {
        match id {
            Some(id) => Upsert::Update { id, draft },
            None => Upsert::Create(draft),
        }
    }

    pub fn method(&self) -> reqwest::Method {
        match self {
            Upsert::Create(_) => reqwest::Method::POST,
            Upsert::Update { .. } => reqwest::Method::PUT,
        }
    }

    pub fn draft(&self) -> &PlantDraft {
        match self {
            Upsert::Create(draft) | Upsert::Update { draft, .. } => draft,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Upsert::Update { .. })
    }

    /// JSON body; updates carry the plant id
    pub fn body(&self) -> serde_json::Value {
        let value = match self {
            Upsert::Create(draft) => serde_json::to_value(draft),
            Upsert::Update { id, draft } => serde_json::to_value(UpdateBody { id: *id, draft }),
        };
        // plain structs of strings, numbers and bools always serialize
        value.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(Error::validation("Email and password are required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
}

impl Registration {
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || self.password.is_empty() || self.full_name.trim().is_empty() {
            return Err(Error::validation("Email, password and full name are required"));
        }
        Ok(())
    }
}

/// Body sent to the auth endpoint
#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub(crate) enum AuthRequest<'a> {
    Register(&'a Registration),
    Login(&'a Credentials),
}

/// Successful register/login answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}
