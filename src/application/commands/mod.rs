// src/application/commands/mod.rs
//
// Command Handlers - one per page action
//
// - Commands are thin adapters between pages and services
// - Commands accept DTOs, return views
// - Admin commands check the guard first
// - Commands NEVER contain business logic

pub mod admin_commands;
pub mod auth_commands;
pub mod form_commands;

pub use admin_commands::*;
pub use auth_commands::*;
pub use form_commands::*;
