//! Person registry: validated person record management.
//!
//! This crate registers, lists, loads, updates, and removes person records
//! keyed by a Brazilian taxpayer number (CPF), validating CPF checksums
//! before registration and translating storage uniqueness failures into a
//! stable error taxonomy.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`person`]: Person records, CPF validation, and the record service
//! - [`config`]: Database settings loaded from the environment
//! - [`telemetry`]: Logging initialisation for binaries

pub mod config;
pub mod person;
pub mod telemetry;
