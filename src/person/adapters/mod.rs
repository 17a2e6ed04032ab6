//! Adapter implementations of the person repository port.

pub mod memory;
pub mod postgres;
