//! `PostgreSQL` adapters for person record persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PersonPgPool, PostgresPersonRepository};
