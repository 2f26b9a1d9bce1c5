//! HTTP Client
//!
//! reqwest implementation of the catalog and auth services. On wasm32 reqwest
//! goes through the browser's fetch.

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{AuthRequest, AuthResponse, AuthService, CatalogService, Credentials, Registration, Upsert};
use crate::config::ApiConfig;
use crate::domain::Plant;
use crate::error::{Error, Result};

/// `{"error": "..."}` as sent by both services on failure
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub(crate) fn list_request(&self) -> reqwest::RequestBuilder {
        self.client.get(&self.config.plants_url)
    }

    pub(crate) fn upsert_request(&self, request: &Upsert) -> reqwest::RequestBuilder {
        self.client
            .request(request.method(), &self.config.plants_url)
            .json(&request.body())
    }

    pub(crate) fn auth_request(&self, body: &AuthRequest<'_>) -> reqwest::RequestBuilder {
        self.client.post(&self.config.auth_url).json(body)
    }
}

/// Turn a non-2xx answer into a service error, preferring the server's message
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Request failed with status {}", status.as_u16()),
    };
    warn!("Service answered {}: {}", status, message);
    Err(Error::Service {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let response = ensure_success(response).await?;
    let status = response.status().as_u16();
    response.json::<T>().await.map_err(|e| Error::Service {
        status,
        message: format!("Malformed response: {}", e),
    })
}

#[async_trait(?Send)]
impl CatalogService for HttpClient {
    async fn list(&self) -> Result<Vec<Plant>> {
        debug!("GET {}", self.config.plants_url);
        let response = self.list_request().send().await?;
        let plants: Vec<Plant> = read_json(response).await?;
        debug!("Loaded {} plants", plants.len());
        Ok(plants)
    }

    async fn upsert(&self, request: &Upsert) -> Result<()> {
        debug!("{} {}", request.method(), self.config.plants_url);
        let response = self.upsert_request(request).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl AuthService for HttpClient {
    async fn register(&self, registration: &Registration) -> Result<AuthResponse> {
        registration.validate()?;
        debug!("Registering {}", registration.email);
        let response = self.auth_request(&AuthRequest::Register(registration)).send().await?;
        read_json(response).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        credentials.validate()?;
        debug!("Logging in {}", credentials.email);
        let response = self.auth_request(&AuthRequest::Login(credentials)).send().await?;
        read_json(response).await
    }
}
