//! Entity factories for tests.
//!
//! Each factory creates an entity with sensible defaults that individual
//! tests override through the builder methods.

pub mod ctf_event;
pub mod helpers;
pub mod solved_challenge;
pub mod user;
