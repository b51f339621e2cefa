//! Request handlers
//!
//! Thin adapters between the HTTP surface and the services.

pub mod attendance;
pub mod auth;
pub mod billing;
pub mod health;
pub mod profile;
pub mod registration;
pub mod schedules;
pub mod students;
