//! Nursery Core
//!
//! Storefront logic shared by the browser app:
//! - domain: plants, catalog, cart reducer, users
//! - session: the session gate over persisted storage
//! - api: catalog/auth service interfaces and the HTTP client
//! - admin: catalog editor dialog and screen state

pub mod admin;
pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod notice;
pub mod session;
pub mod storage;
pub mod view;


pub use config::ApiConfig;
pub use error::{Error, Result};
