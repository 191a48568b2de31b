//! # Storage Traits
//!
//! This module defines the storage abstraction trait that allows different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::member::FamilyMember;

/// Trait defining the interface for member collection persistence.
///
/// The engine persists write-through: every mutation saves the entire
/// collection, so the contract is deliberately coarse-grained — load
/// everything, save everything. This abstracts away the specific storage
/// implementation (a JSON file today, any document store tomorrow) without
/// the domain layer changing.
#[async_trait]
pub trait MemberStorage: Send + Sync {
    /// Load the full member collection from durable storage.
    ///
    /// A missing backing store yields an empty collection. Corrupt content
    /// also yields an empty collection after logging a warning; starting
    /// over is preferred to refusing to start.
    async fn load_members(&self) -> Result<Vec<FamilyMember>>;

    /// Overwrite durable storage with the full member collection
    async fn save_members(&self, members: &[FamilyMember]) -> Result<()>;
}
