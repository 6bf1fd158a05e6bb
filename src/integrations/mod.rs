// src/integrations/mod.rs
//
// External Integrations
//
// Infrastructure for talking to systems outside this crate. Maps wire
// formats to domain types; never decides business outcomes.

pub mod api;

pub use api::client::{ApiClient, BinaryResponse};
