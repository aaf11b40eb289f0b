//! # cookoff-store
//!
//! Local persistence for the CookOff competition, backed by SQLite.
//!
//! The store keeps three named collections — `chefs`, `audiences`, and the
//! `competitionState` singleton — each persisted as a whole JSON document.
//! Reads return the full collection (empty / default when absent) and writes
//! replace it wholesale, mirroring the key-value contract the application
//! was built around. The [`CollectionStore`] trait is the seam: the SQLite
//! [`Database`] is the durable implementation and [`MemoryStore`] the
//! ephemeral one.

pub mod collections;
pub mod database;
pub mod memory;
pub mod migrations;
pub mod models;

mod error;

pub use collections::CollectionStore;
pub use database::Database;
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use models::*;
