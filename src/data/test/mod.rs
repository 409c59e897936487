mod active;
mod event;
mod participation;
mod settings;
mod solve;
mod user;
