use serde::{Deserialize, Serialize};

/// A family member as exposed to the presentation layer and as laid out in
/// the persisted JSON document.
///
/// Date fields are ISO 8601 (`YYYY-MM-DD`) strings; the portrait travels as
/// base64 text so the record stays plain JSON end to end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FamilyMember {
    /// Store-assigned id, unique and never reused
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    /// Birth date in ISO 8601 format (YYYY-MM-DD)
    pub birth_date: String,
    /// Family relationship, e.g. "אמא" or "cousin"
    pub relationship: Option<String>,
    pub notes: Option<String>,
    /// Gift candidates in insertion order, no duplicates
    pub gift_ideas: Vec<String>,
    /// Gifts already given, most recent first
    pub gift_history: Vec<GiftHistoryEntry>,
    /// Portrait image bytes encoded as base64, if one was uploaded
    pub profile_picture_base64: Option<String>,
}

/// One gift that was already given
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GiftHistoryEntry {
    /// Date the gift was given (YYYY-MM-DD)
    pub date_given: String,
    pub description: String,
    /// What the gift was for, e.g. "birthday" or "חנוכה"
    pub occasion: Option<String>,
}

/// Request to create a new family member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateMemberRequest {
    pub first_name: String,
    pub last_name: String,
    /// Birth date (YYYY-MM-DD)
    pub birth_date: String,
    pub relationship: Option<String>,
    pub notes: Option<String>,
}

/// Partial update of a member's own fields.
///
/// Only fields carrying `Some` are applied. A field whose value fails its
/// own parse or validation (unparsable `birth_date`, blank name, undecodable
/// portrait) is skipped with a warning while the rest still apply.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateMemberRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// New birth date (YYYY-MM-DD)
    pub birth_date: Option<String>,
    /// New relationship; an empty string clears the field
    pub relationship: Option<String>,
    /// New notes; an empty string clears the field
    pub notes: Option<String>,
    /// New portrait as base64 text; an empty string removes the portrait
    pub profile_picture_base64: Option<String>,
}

/// Response carrying a single member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberResponse {
    pub member: FamilyMember,
    pub success_message: String,
}

/// Response carrying a list of members
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberListResponse {
    pub members: Vec<FamilyMember>,
}

/// Request to add a gift idea to a member's list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddGiftIdeaRequest {
    pub idea: String,
}

/// Request to remove a gift idea from a member's list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoveGiftIdeaRequest {
    pub idea: String,
}

/// Request to record a gift that was given
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddGiftHistoryRequest {
    /// Date the gift was given (YYYY-MM-DD)
    pub date_given: String,
    pub description: String,
    pub occasion: Option<String>,
}

/// Request to replace a gift history entry in place.
///
/// The index addresses the entry's current position; the history is
/// re-sorted after every mutation, so indices must come from a fresh read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateGiftHistoryRequest {
    pub index: usize,
    /// Date the gift was given (YYYY-MM-DD)
    pub date_given: String,
    pub description: String,
    pub occasion: Option<String>,
}

/// Request to remove a gift history entry by position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoveGiftHistoryRequest {
    pub index: usize,
}

/// One member whose birthday falls inside the lookahead window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpcomingBirthday {
    pub member: FamilyMember,
    /// Date the birthday falls on (YYYY-MM-DD)
    pub next_birthday: String,
    /// Whole days until then; 0 means the birthday is on the reference date
    pub days_until: i64,
}

/// Response for an upcoming-birthdays query, soonest first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpcomingBirthdaysResponse {
    pub upcoming: Vec<UpcomingBirthday>,
}
