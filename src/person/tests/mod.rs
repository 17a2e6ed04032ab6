//! Unit tests for the person module.
