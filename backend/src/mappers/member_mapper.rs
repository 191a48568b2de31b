//! Conversion between shared member DTOs and domain member models.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::domain::birthday;
use crate::domain::models::member::{
    FamilyMember as DomainMember, GiftHistoryEntry as DomainGiftHistoryEntry,
};
use shared::{
    FamilyMember as SharedMember, GiftHistoryEntry as SharedGiftHistoryEntry, MemberListResponse,
    MemberResponse,
};

/// Mapper to convert between shared member DTOs and domain member models.
pub struct MemberMapper;

impl MemberMapper {
    /// Converts a shared member DTO to a domain member model.
    ///
    /// Runs the same validation as direct construction, so a record that
    /// would never have been accepted cannot enter the store through disk.
    pub fn to_domain(dto: SharedMember) -> Result<DomainMember> {
        let birth_date = birthday::parse_iso_date(&dto.birth_date)
            .context("Failed to parse birth_date from shared DTO")?;

        let mut member = DomainMember::new(
            dto.id,
            &dto.first_name,
            &dto.last_name,
            birth_date,
            dto.relationship.as_deref(),
            dto.notes.as_deref(),
        )
        .context("Invalid member record")?;

        for idea in &dto.gift_ideas {
            member.add_gift_idea(idea);
        }
        for entry in dto.gift_history {
            let date_given = birthday::parse_iso_date(&entry.date_given)
                .context("Failed to parse gift history date from shared DTO")?;
            member
                .add_gift_to_history(date_given, &entry.description, entry.occasion.as_deref())
                .context("Invalid gift history entry")?;
        }
        if let Some(encoded) = dto.profile_picture_base64 {
            let bytes = BASE64
                .decode(encoded.as_bytes())
                .context("Failed to decode profile picture from shared DTO")?;
            member.profile_picture = Some(bytes);
        }

        Ok(member)
    }

    /// Converts a domain member model to a shared member DTO.
    pub fn to_dto(domain: DomainMember) -> SharedMember {
        SharedMember {
            id: domain.id,
            first_name: domain.first_name,
            last_name: domain.last_name,
            birth_date: birthday::format_iso_date(domain.birth_date),
            relationship: domain.relationship,
            notes: domain.notes,
            gift_ideas: domain.gift_ideas,
            gift_history: domain
                .gift_history
                .into_iter()
                .map(Self::gift_history_to_dto)
                .collect(),
            profile_picture_base64: domain
                .profile_picture
                .map(|bytes| BASE64.encode(bytes)),
        }
    }

    fn gift_history_to_dto(entry: DomainGiftHistoryEntry) -> SharedGiftHistoryEntry {
        SharedGiftHistoryEntry {
            date_given: birthday::format_iso_date(entry.date_given),
            description: entry.description,
            occasion: entry.occasion,
        }
    }

    pub fn to_member_list_dto(domain_members: Vec<DomainMember>) -> MemberListResponse {
        MemberListResponse {
            members: domain_members.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_member_response_dto(domain: DomainMember, message: &str) -> MemberResponse {
        MemberResponse {
            member: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }
}
