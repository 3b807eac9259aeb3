//! Repository functions: domain models in, domain models out, `DomainError` on failure.

pub mod games;
pub mod scores;
pub mod users;
