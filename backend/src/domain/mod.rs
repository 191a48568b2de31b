//! # Domain Module
//!
//! Business logic and rules for tracking family members and their birthdays.
//!
//! The domain layer is where the real invariants live: member validation,
//! gift-idea and gift-history semantics, birthday arithmetic, the upcoming
//! window query and free-text search. It knows nothing about how data is
//! rendered and reaches storage only through the `MemberStorage` trait.

pub mod birthday;
pub mod member_service;
pub mod models;

pub use member_service::*;
