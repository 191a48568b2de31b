//! Member management service: the single owner of the member collection.
//!
//! All reads and writes go through this service. It holds the in-memory
//! collection and the id counter behind one async mutex so that every
//! mutate-then-persist sequence runs as a unit, and it writes the whole
//! collection through to storage after each mutation. Raw mutable member
//! references never leave the service; gift ideas and gift history are
//! changed through service methods that persist in the same lock scope.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::NaiveDate;
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::birthday;
use crate::domain::models::member::{normalize_optional_text, FamilyMember};
use crate::mappers::member_mapper::MemberMapper;
use crate::storage::MemberStorage;
use shared::{
    AddGiftHistoryRequest, AddGiftIdeaRequest, CreateMemberRequest, FamilyMember as MemberDto,
    MemberListResponse, MemberResponse, RemoveGiftHistoryRequest, RemoveGiftIdeaRequest,
    UpcomingBirthday, UpcomingBirthdaysResponse, UpdateGiftHistoryRequest, UpdateMemberRequest,
};

/// Default lookahead window for upcoming-birthday queries, in days
pub const DEFAULT_DAYS_IN_ADVANCE: i64 = 30;

/// In-memory store state: the collection plus the id counter
struct StoreState {
    members: Vec<FamilyMember>,
    next_id: u64,
}

impl StoreState {
    fn find_member_mut(&mut self, member_id: u64) -> Option<&mut FamilyMember> {
        self.members.iter_mut().find(|m| m.id == member_id)
    }
}

/// Service owning the family member collection
#[derive(Clone)]
pub struct MemberService {
    repository: Arc<dyn MemberStorage>,
    state: Arc<Mutex<StoreState>>,
}

impl MemberService {
    /// Create the service and load the persisted collection.
    ///
    /// The id counter re-seeds to one past the highest persisted id, so ids
    /// are never reused across process restarts.
    pub async fn new(repository: Arc<dyn MemberStorage>) -> Result<Self> {
        let members = repository.load_members().await?;
        let next_id = members.iter().map(|m| m.id).max().map_or(1, |max| max + 1);

        info!(
            "Member store ready with {} members, next id {}",
            members.len(),
            next_id
        );

        Ok(Self {
            repository,
            state: Arc::new(Mutex::new(StoreState { members, next_id })),
        })
    }

    /// Persist the current collection now.
    ///
    /// Callers that mutate through this service never need this; it exists
    /// as an explicit save point for the presentation layer.
    pub async fn save(&self) -> Result<()> {
        let state = self.state.lock().await;
        self.persist(&state).await
    }

    async fn persist(&self, state: &StoreState) -> Result<()> {
        self.repository
            .save_members(&state.members)
            .await
            .context("Failed to persist member collection")
    }

    /// Create a new member with a fresh id
    pub async fn create_member(&self, request: CreateMemberRequest) -> Result<MemberResponse> {
        info!(
            "Creating member: {} {}",
            request.first_name, request.last_name
        );

        let birth_date = birthday::parse_iso_date(&request.birth_date)?;

        let mut state = self.state.lock().await;
        let member = FamilyMember::new(
            state.next_id,
            &request.first_name,
            &request.last_name,
            birth_date,
            request.relationship.as_deref(),
            request.notes.as_deref(),
        )?;
        state.next_id += 1;
        state.members.push(member.clone());
        self.persist(&state).await?;

        info!("Created member {} with id {}", member.full_name(), member.id);

        Ok(MemberMapper::to_member_response_dto(
            member,
            "Member created successfully",
        ))
    }

    /// Get a member by id; `None` if no member has that id
    pub async fn get_member(&self, member_id: u64) -> Result<Option<MemberDto>> {
        let state = self.state.lock().await;
        Ok(state
            .members
            .iter()
            .find(|m| m.id == member_id)
            .cloned()
            .map(MemberMapper::to_dto))
    }

    /// List all members in insertion order
    pub async fn list_members(&self) -> Result<MemberListResponse> {
        let state = self.state.lock().await;
        Ok(MemberMapper::to_member_list_dto(state.members.clone()))
    }

    /// Apply a partial update to a member's own fields.
    ///
    /// Fields that fail their own parse or validation are skipped with a
    /// warning while the remaining fields still apply; one persist happens
    /// after all fields are applied. Returns `None` if the id is unknown.
    pub async fn update_member(
        &self,
        member_id: u64,
        request: UpdateMemberRequest,
    ) -> Result<Option<MemberResponse>> {
        info!("Updating member: {}", member_id);

        let mut state = self.state.lock().await;
        let member = match state.find_member_mut(member_id) {
            Some(member) => member,
            None => {
                warn!("Member not found for update: {}", member_id);
                return Ok(None);
            }
        };

        if let Some(first_name) = request.first_name {
            let trimmed = first_name.trim();
            if trimmed.is_empty() {
                warn!("Skipping empty first_name update for member {}", member_id);
            } else {
                member.first_name = trimmed.to_string();
            }
        }
        if let Some(last_name) = request.last_name {
            let trimmed = last_name.trim();
            if trimmed.is_empty() {
                warn!("Skipping empty last_name update for member {}", member_id);
            } else {
                member.last_name = trimmed.to_string();
            }
        }
        if let Some(birth_date) = request.birth_date {
            match birthday::parse_iso_date(&birth_date) {
                Ok(parsed) => member.birth_date = parsed,
                Err(e) => warn!("Skipping birth_date update for member {}: {}", member_id, e),
            }
        }
        if let Some(relationship) = request.relationship {
            member.relationship = normalize_optional_text(Some(&relationship));
        }
        if let Some(notes) = request.notes {
            member.notes = normalize_optional_text(Some(&notes));
        }
        if let Some(encoded) = request.profile_picture_base64 {
            if encoded.trim().is_empty() {
                member.profile_picture = None;
            } else {
                match BASE64.decode(encoded.trim().as_bytes()) {
                    Ok(bytes) => member.profile_picture = Some(bytes),
                    Err(e) => warn!(
                        "Skipping profile picture update for member {}: {}",
                        member_id, e
                    ),
                }
            }
        }

        let updated = member.clone();
        self.persist(&state).await?;

        info!("Updated member {} with id {}", updated.full_name(), member_id);

        Ok(Some(MemberMapper::to_member_response_dto(
            updated,
            "Member updated successfully",
        )))
    }

    /// Delete a member by id.
    ///
    /// Returns whether a member was removed; nothing is written when the id
    /// is unknown.
    pub async fn delete_member(&self, member_id: u64) -> Result<bool> {
        let mut state = self.state.lock().await;
        let initial_count = state.members.len();
        state.members.retain(|m| m.id != member_id);

        if state.members.len() == initial_count {
            warn!("Member not found for deletion: {}", member_id);
            return Ok(false);
        }

        self.persist(&state).await?;
        info!("Deleted member {}", member_id);
        Ok(true)
    }

    /// Members whose next birthday falls within `days_in_advance` days of
    /// `reference_date` (inclusive on both ends), soonest first. Members the
    /// same number of days away keep their collection order.
    pub async fn upcoming_birthdays(
        &self,
        days_in_advance: i64,
        reference_date: NaiveDate,
    ) -> Result<UpcomingBirthdaysResponse> {
        let state = self.state.lock().await;

        let mut upcoming: Vec<(i64, &FamilyMember)> = state
            .members
            .iter()
            .filter_map(|member| {
                let days = member.days_until_birthday(reference_date);
                (0..=days_in_advance).contains(&days).then_some((days, member))
            })
            .collect();
        upcoming.sort_by_key(|(days, _)| *days);

        let upcoming = upcoming
            .into_iter()
            .map(|(days, member)| UpcomingBirthday {
                next_birthday: birthday::format_iso_date(member.next_birthday(reference_date)),
                days_until: days,
                member: MemberMapper::to_dto(member.clone()),
            })
            .collect();

        Ok(UpcomingBirthdaysResponse { upcoming })
    }

    /// Case-insensitive substring search over names, relationship, notes and
    /// gift ideas. An empty query is a substring of everything and therefore
    /// matches every member.
    pub async fn search_members(&self, query: &str) -> Result<MemberListResponse> {
        let needle = query.trim().to_lowercase();

        let state = self.state.lock().await;
        let matches: Vec<FamilyMember> = state
            .members
            .iter()
            .filter(|member| Self::search_haystack(member).contains(&needle))
            .cloned()
            .collect();

        info!("Search '{}' matched {} members", needle, matches.len());
        Ok(MemberMapper::to_member_list_dto(matches))
    }

    fn search_haystack(member: &FamilyMember) -> String {
        let mut haystack = format!("{} {}", member.first_name, member.last_name);
        if let Some(relationship) = &member.relationship {
            haystack.push(' ');
            haystack.push_str(relationship);
        }
        if let Some(notes) = &member.notes {
            haystack.push(' ');
            haystack.push_str(notes);
        }
        for idea in &member.gift_ideas {
            haystack.push(' ');
            haystack.push_str(idea);
        }
        haystack.to_lowercase()
    }

    /// Add a gift idea to a member's list.
    ///
    /// Blank ideas and exact duplicates leave the member unchanged and do
    /// not trigger a write. Returns `None` if the id is unknown.
    pub async fn add_gift_idea(
        &self,
        member_id: u64,
        request: AddGiftIdeaRequest,
    ) -> Result<Option<MemberResponse>> {
        let mut state = self.state.lock().await;
        let member = match state.find_member_mut(member_id) {
            Some(member) => member,
            None => return Ok(None),
        };

        let changed = member.add_gift_idea(&request.idea);
        let updated = member.clone();
        if changed {
            self.persist(&state).await?;
            info!("Added gift idea for member {}", member_id);
        }

        let message = if changed {
            "Gift idea added"
        } else {
            "Gift idea unchanged"
        };
        Ok(Some(MemberMapper::to_member_response_dto(updated, message)))
    }

    /// Remove a gift idea from a member's list.
    ///
    /// An idea that is not present leaves the member unchanged and does not
    /// trigger a write. Returns `None` if the id is unknown.
    pub async fn remove_gift_idea(
        &self,
        member_id: u64,
        request: RemoveGiftIdeaRequest,
    ) -> Result<Option<MemberResponse>> {
        let mut state = self.state.lock().await;
        let member = match state.find_member_mut(member_id) {
            Some(member) => member,
            None => return Ok(None),
        };

        let changed = member.remove_gift_idea(&request.idea);
        let updated = member.clone();
        if changed {
            self.persist(&state).await?;
            info!("Removed gift idea for member {}", member_id);
        }

        let message = if changed {
            "Gift idea removed"
        } else {
            "Gift idea unchanged"
        };
        Ok(Some(MemberMapper::to_member_response_dto(updated, message)))
    }

    /// Record a gift that was given to a member.
    ///
    /// The history stays sorted most recent first. Returns `None` if the id
    /// is unknown; an unparsable date or blank description is an error.
    pub async fn add_gift_to_history(
        &self,
        member_id: u64,
        request: AddGiftHistoryRequest,
    ) -> Result<Option<MemberResponse>> {
        let date_given = birthday::parse_iso_date(&request.date_given)?;

        let mut state = self.state.lock().await;
        let member = match state.find_member_mut(member_id) {
            Some(member) => member,
            None => return Ok(None),
        };

        member.add_gift_to_history(date_given, &request.description, request.occasion.as_deref())?;
        let updated = member.clone();
        self.persist(&state).await?;

        info!("Recorded gift for member {}", member_id);
        Ok(Some(MemberMapper::to_member_response_dto(
            updated,
            "Gift recorded",
        )))
    }

    /// Replace a gift history entry in place.
    ///
    /// Fails with an out-of-range error for an invalid index; the history is
    /// re-sorted afterwards, so the entry may move. Returns `None` if the id
    /// is unknown.
    pub async fn update_gift_in_history(
        &self,
        member_id: u64,
        request: UpdateGiftHistoryRequest,
    ) -> Result<Option<MemberResponse>> {
        let date_given = birthday::parse_iso_date(&request.date_given)?;

        let mut state = self.state.lock().await;
        let member = match state.find_member_mut(member_id) {
            Some(member) => member,
            None => return Ok(None),
        };

        member.update_gift_in_history(
            request.index,
            date_given,
            &request.description,
            request.occasion.as_deref(),
        )?;
        let updated = member.clone();
        self.persist(&state).await?;

        info!(
            "Updated gift history entry {} for member {}",
            request.index, member_id
        );
        Ok(Some(MemberMapper::to_member_response_dto(
            updated,
            "Gift updated",
        )))
    }

    /// Remove a gift history entry by position.
    ///
    /// Fails with an out-of-range error for an invalid index, matching the
    /// update operation. Returns `None` if the id is unknown.
    pub async fn remove_gift_from_history(
        &self,
        member_id: u64,
        request: RemoveGiftHistoryRequest,
    ) -> Result<Option<MemberResponse>> {
        let mut state = self.state.lock().await;
        let member = match state.find_member_mut(member_id) {
            Some(member) => member,
            None => return Ok(None),
        };

        member.remove_gift_from_history(request.index)?;
        let updated = member.clone();
        self.persist(&state).await?;

        info!(
            "Removed gift history entry {} for member {}",
            request.index, member_id
        );
        Ok(Some(MemberMapper::to_member_response_dto(
            updated,
            "Gift removed",
        )))
    }
}
