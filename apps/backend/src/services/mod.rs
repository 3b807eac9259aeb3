//! Use cases composed from repos and the pure domain.

pub mod games;
pub mod scores;
pub mod stats;
pub mod users;
