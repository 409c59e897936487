//! Canned external API payloads for parser tests.

pub mod ctftime;
