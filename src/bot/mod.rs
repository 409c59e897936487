pub mod commands;
pub mod handler;
pub mod start;
