//! # Storage Module
//!
//! Handles all data persistence operations for the birthday tracker.
//!
//! This module abstracts away the specific storage implementation details
//! and provides a consistent interface for persisting and retrieving the
//! member collection. The implementation can be swapped out (JSON file,
//! SQLite, cloud storage, etc.) without affecting the domain logic.
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: a single JSON document holding every member,
//!   rewritten in full after each mutation
//! - **Durability**: atomic temp-file-then-rename overwrite
//! - **Recovery**: a missing or corrupt document degrades to an empty
//!   collection rather than a startup failure
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: clean separation between domain and data access
//! - **Dependency Inversion**: the domain depends on the storage trait, not
//!   on an implementation
//! - **Testability**: repositories run against disposable temp directories

pub mod json;
pub mod traits;

// Re-export the main types that other modules need
pub use traits::MemberStorage;
