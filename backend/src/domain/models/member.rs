//! Domain model for a tracked family member.

use chrono::NaiveDate;

use crate::domain::birthday;

/// A member failed construction-time validation
#[derive(Debug, thiserror::Error)]
pub enum MemberValidationError {
    #[error("First name cannot be empty")]
    EmptyFirstName,
    #[error("Last name cannot be empty")]
    EmptyLastName,
}

/// A gift history mutation was rejected
#[derive(Debug, thiserror::Error)]
pub enum GiftHistoryError {
    #[error("Gift description cannot be empty")]
    EmptyDescription,
    #[error("Gift history index {0} is out of range")]
    IndexOutOfRange(usize),
}

/// A date-like text field did not parse as `YYYY-MM-DD`
#[derive(Debug, thiserror::Error)]
#[error("Invalid date '{0}': expected YYYY-MM-DD")]
pub struct InvalidDateError(pub String);

/// A single family member tracked by the system
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyMember {
    /// Store-assigned id, unique and never reused
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub relationship: Option<String>,
    pub notes: Option<String>,
    pub gift_ideas: Vec<String>,
    pub gift_history: Vec<GiftHistoryEntry>,
    pub profile_picture: Option<Vec<u8>>,
}

/// One gift that was already given.
///
/// Entries carry no identity of their own: they are addressed by position in
/// the member's history, and the history is re-sorted after every mutation,
/// so positions must not be cached across operations.
#[derive(Debug, Clone, PartialEq)]
pub struct GiftHistoryEntry {
    pub date_given: NaiveDate,
    pub description: String,
    pub occasion: Option<String>,
}

impl GiftHistoryEntry {
    /// Build an entry, rejecting a blank description
    pub fn new(
        date_given: NaiveDate,
        description: &str,
        occasion: Option<&str>,
    ) -> Result<Self, GiftHistoryError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(GiftHistoryError::EmptyDescription);
        }
        Ok(Self {
            date_given,
            description: description.to_string(),
            occasion: normalize_optional_text(occasion),
        })
    }
}

impl FamilyMember {
    /// Create a member with empty gift lists and no portrait.
    ///
    /// Names are trimmed and must be non-empty; blank optional fields are
    /// normalized to `None`. A member that fails validation is never
    /// constructed.
    pub fn new(
        id: u64,
        first_name: &str,
        last_name: &str,
        birth_date: NaiveDate,
        relationship: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Self, MemberValidationError> {
        let first_name = first_name.trim();
        if first_name.is_empty() {
            return Err(MemberValidationError::EmptyFirstName);
        }
        let last_name = last_name.trim();
        if last_name.is_empty() {
            return Err(MemberValidationError::EmptyLastName);
        }

        Ok(Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birth_date,
            relationship: normalize_optional_text(relationship),
            notes: normalize_optional_text(notes),
            gift_ideas: Vec::new(),
            gift_history: Vec::new(),
            profile_picture: None,
        })
    }

    /// Full name as "first last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Date of this member's next birthday on or after `reference_date`
    pub fn next_birthday(&self, reference_date: NaiveDate) -> NaiveDate {
        birthday::next_occurrence(self.birth_date, reference_date)
    }

    /// Whole days until this member's next birthday; 0 on the day itself
    pub fn days_until_birthday(&self, reference_date: NaiveDate) -> i64 {
        birthday::days_until(self.birth_date, reference_date)
    }

    /// Append a gift idea. Blank ideas and exact duplicates are ignored.
    /// Returns whether the list changed.
    pub fn add_gift_idea(&mut self, idea: &str) -> bool {
        let idea = idea.trim();
        if idea.is_empty() || self.gift_ideas.iter().any(|existing| existing == idea) {
            return false;
        }
        self.gift_ideas.push(idea.to_string());
        true
    }

    /// Remove the first exact match of `idea`.
    /// Returns whether anything was removed.
    pub fn remove_gift_idea(&mut self, idea: &str) -> bool {
        match self.gift_ideas.iter().position(|existing| existing == idea) {
            Some(position) => {
                self.gift_ideas.remove(position);
                true
            }
            None => false,
        }
    }

    /// Record a gift that was given and keep the history ordered
    pub fn add_gift_to_history(
        &mut self,
        date_given: NaiveDate,
        description: &str,
        occasion: Option<&str>,
    ) -> Result<(), GiftHistoryError> {
        let entry = GiftHistoryEntry::new(date_given, description, occasion)?;
        self.gift_history.push(entry);
        self.sort_gift_history();
        Ok(())
    }

    /// Replace the entry at `index` and keep the history ordered
    pub fn update_gift_in_history(
        &mut self,
        index: usize,
        date_given: NaiveDate,
        description: &str,
        occasion: Option<&str>,
    ) -> Result<(), GiftHistoryError> {
        if index >= self.gift_history.len() {
            return Err(GiftHistoryError::IndexOutOfRange(index));
        }
        self.gift_history[index] = GiftHistoryEntry::new(date_given, description, occasion)?;
        self.sort_gift_history();
        Ok(())
    }

    /// Remove and return the entry at `index`
    pub fn remove_gift_from_history(
        &mut self,
        index: usize,
    ) -> Result<GiftHistoryEntry, GiftHistoryError> {
        if index >= self.gift_history.len() {
            return Err(GiftHistoryError::IndexOutOfRange(index));
        }
        Ok(self.gift_history.remove(index))
    }

    /// Most recent gift first; entries with equal dates keep their relative order
    fn sort_gift_history(&mut self) {
        self.gift_history
            .sort_by(|a, b| b.date_given.cmp(&a.date_given));
    }
}

/// Trim an optional text field, turning blank values into `None`
pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}
