//! Database module
//!
//! This module handles database connections and check-in/event storage

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod service;
pub mod store;

// Re-export commonly used database components
pub use connection::{create_pool, health_check, run_migrations, DatabaseConfig, DatabasePool};
pub use memory::{InMemoryCheckinStore, InMemoryEventSource};
pub use repositories::{CheckinRepository, EventRepository};
pub use service::DatabaseService;
pub use store::{CheckinStore, EventSource};
