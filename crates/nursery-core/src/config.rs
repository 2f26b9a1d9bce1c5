//! Service Endpoints
//!
//! Remote URLs the storefront talks to. Values can be baked in at build time
//! through `NURSERY_PLANTS_URL` and `NURSERY_AUTH_URL`.

use serde::{Deserialize, Serialize};

const DEFAULT_PLANTS_URL: &str = "https://functions.poehali.dev/c1c40145-636e-453a-a314-7ed68738cb4b";
const DEFAULT_AUTH_URL: &str = "https://functions.poehali.dev/39eb87d7-1c52-486c-9424-80344bfc27a4";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Catalog read (GET) and write (POST/PUT) endpoint
    pub plants_url: String,
    /// Register/login endpoint
    pub auth_url: String,
}

impl ApiConfig {
    pub fn new(plants_url: impl Into<String>, auth_url: impl Into<String>) -> Self {
        Self {
            plants_url: plants_url.into(),
            auth_url: auth_url.into(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(
            option_env!("NURSERY_PLANTS_URL").unwrap_or(DEFAULT_PLANTS_URL),
            option_env!("NURSERY_AUTH_URL").unwrap_or(DEFAULT_AUTH_URL),
        )
    }
}
