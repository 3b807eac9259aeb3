//! Backend test support utilities
//!
//! Shared helpers for the hangman backend's unit and integration tests:
//! logging initialization, Problem Details assertions and unique fixture names.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
