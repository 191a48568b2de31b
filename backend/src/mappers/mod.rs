//! Mappers between shared DTOs and domain models.

pub mod member_mapper;
