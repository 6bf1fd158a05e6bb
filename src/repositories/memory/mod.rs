// src/repositories/memory/mod.rs
//
// In-process strategy: seeded fixture data, simulated latency, no network.

pub mod fixtures;
pub mod memory_application_repository;
pub mod memory_auth_gateway;

pub use memory_application_repository::MemoryApplicationRepository;
pub use memory_auth_gateway::MemoryAuthGateway;
