//! JSON-file member repository: whole-collection load and save.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::fs;

use super::connection::JsonConnection;
use crate::domain::models::member::FamilyMember as DomainMember;
use crate::mappers::member_mapper::MemberMapper;
use crate::storage::MemberStorage;
use shared::FamilyMember as MemberRecord;

/// JSON-file backed member repository
#[derive(Clone)]
pub struct MemberRepository {
    connection: JsonConnection,
}

impl MemberRepository {
    /// Create a new JSON member repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn parse_members(content: &str) -> Result<Vec<DomainMember>> {
        let records: Vec<MemberRecord> = serde_json::from_str(content)?;
        records.into_iter().map(MemberMapper::to_domain).collect()
    }
}

#[async_trait]
impl MemberStorage for MemberRepository {
    async fn load_members(&self) -> Result<Vec<DomainMember>> {
        let path = self.connection.members_file_path();

        if !path.exists() {
            debug!(
                "No member file at {}, starting with empty collection",
                path.display()
            );
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read member file {}", path.display()))?;

        match Self::parse_members(&content) {
            Ok(members) => {
                info!("Loaded {} members from {}", members.len(), path.display());
                Ok(members)
            }
            Err(e) => {
                warn!(
                    "Member file {} is corrupt ({:#}), starting with empty collection",
                    path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save_members(&self, members: &[DomainMember]) -> Result<()> {
        let records: Vec<MemberRecord> = members
            .iter()
            .cloned()
            .map(MemberMapper::to_dto)
            .collect();
        // serde_json writes non-ASCII characters verbatim, so Hebrew and
        // other non-Latin text round-trips byte for byte
        let json = serde_json::to_string_pretty(&records)?;

        let path = self.connection.members_file_path();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Atomic write using temp file
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write member file {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace member file {}", path.display()))?;

        debug!("Saved {} members to {}", members.len(), path.display());
        Ok(())
    }
}
