// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories are DUMB data mappers
// - NO business logic beyond what the backing store itself does
// - NO event emission
// - Lookups return `Option`; services decide what "absent" means
//
// Two strategies per store: `memory` (in-process, simulated latency) and
// `http` (the REST API). One is picked at startup and injected.

pub mod application_repository;
pub mod auth_gateway;
pub mod http;
pub mod memory;
pub mod session_store;

pub use application_repository::ApplicationRepository;
pub use auth_gateway::AuthGateway;
pub use http::{HttpApplicationRepository, HttpAuthGateway};
pub use memory::{MemoryApplicationRepository, MemoryAuthGateway};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};

#[cfg(test)]
pub use application_repository::MockApplicationRepository;
#[cfg(test)]
pub use auth_gateway::MockAuthGateway;
