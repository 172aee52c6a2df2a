pub mod build;
pub mod cart;
pub mod catalog;
pub mod compat;
pub mod config;
mod error;
pub mod storage;

pub use build::{BuildSelection, BuildSession, SavedBuild, Slot};
pub use cart::{Cart, CartItem};
pub use catalog::{CatalogIndex, CatalogIssue, CatalogLookup, Category, ComponentSpec, Product};
pub use compat::{
    CompatibilityEngine, CompatibilityIssue, CompatibilityStatus, Evaluation, IssueKind, Severity,
};
pub use config::{EngineConfig, PowerPolicy};
pub use error::{CatalogError, ConfigError, StorageError};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};

// Re-export the emitter backend so listeners can name its types
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
