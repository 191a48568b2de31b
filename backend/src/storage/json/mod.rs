//! JSON-file storage backend.

pub mod connection;
pub mod member_repository;

pub use connection::JsonConnection;
pub use member_repository::MemberRepository;
