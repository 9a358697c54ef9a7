//! Task-list store module.
//!
//! This module contains the state-management core of the application,
//! including:
//! - The durable `Task` record and view `Filter`
//! - The `TaskStore` owning the collection and all mutating operations
//! - The persistence adapter mirroring the collection to the data file
//! - Store error handling

mod error;
mod persist;
mod task;

pub use error::StoreError;
pub use persist::Persistence;
pub use task::{EditSession, Filter, Task};

// Re-export implementation from store_impl.rs
#[path = "store_impl.rs"]
mod store_impl;

pub use store_impl::TaskStore;
