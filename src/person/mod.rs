//! Person record management.
//!
//! This module registers, lists, loads, updates, and removes person records
//! identified by a Brazilian taxpayer number (CPF). CPF checksum validation
//! happens at the service boundary; uniqueness of `cpf` and `email` is left to
//! the storage layer and translated into service errors after the fact. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
