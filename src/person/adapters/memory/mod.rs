//! In-memory adapters for person record storage.

mod person;

pub use person::InMemoryPersonRepository;
