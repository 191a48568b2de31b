//! # Birthday Tracker Backend
//!
//! Core engine for the family birthday tracker: the member data model, the
//! store that owns the collection, and the persistence layer beneath it.
//!
//! The backend is UI-agnostic. A presentation shell (desktop app, CLI,
//! whatever) drives it exclusively through [`MemberService`] operations and
//! the request/response types in the `shared` crate.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! Presentation shell (out of scope here)
//!     ↓
//! Domain Layer (member service, models, birthday arithmetic)
//!     ↓
//! Storage Layer (JSON document persistence)
//! ```
//!
//! ## Lifecycle
//!
//! Call [`initialize_backend`] once at process start with the data
//! directory, keep the returned [`AppState`] and hand clones of it to every
//! collaborator. There is deliberately no global instance: tests build
//! isolated states over temp directories the same way production builds the
//! real one.

pub mod domain;
pub mod mappers;
pub mod storage;

use anyhow::Result;
use log::info;
use std::path::Path;
use std::sync::Arc;

pub use domain::member_service::{MemberService, DEFAULT_DAYS_IN_ADVANCE};
use storage::json::{JsonConnection, MemberRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub member_service: MemberService,
}

/// Initialize the backend with all required services, storing data in
/// `data_dir`. Loads the persisted collection before returning.
pub async fn initialize_backend<P: AsRef<Path>>(data_dir: P) -> Result<AppState> {
    info!("Setting up storage");
    let connection = JsonConnection::new(data_dir)?;
    initialize_with_connection(connection).await
}

/// Initialize the backend in the default data directory
/// (~/Documents/Family Birthdays)
pub async fn initialize_default_backend() -> Result<AppState> {
    info!("Setting up storage in default data directory");
    let connection = JsonConnection::new_default()?;
    initialize_with_connection(connection).await
}

async fn initialize_with_connection(connection: JsonConnection) -> Result<AppState> {
    let repository = Arc::new(MemberRepository::new(connection));

    info!("Setting up domain model");
    let member_service = MemberService::new(repository).await?;

    Ok(AppState { member_service })
}
