// src/application/mod.rs
//
// Application Layer
//
// - Boundary between the pages (here: the CLI) and the services
// - Translates DTOs into domain requests and results into views
// - Owns the wiring of strategies into services

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, Operation, ToErrorResponse};
pub use state::AppState;
