//! Compatibility engine: pairwise and system-wide rules over a [`BuildSelection`].
//!
//! The engine is a pure function of the selection and the catalog. It never fails;
//! ids it cannot resolve are logged and treated as unselected.
//!
//! ```ignore
//! use part_picker::{catalog, BuildSelection, CompatibilityEngine, Slot};
//!
//! let engine = CompatibilityEngine::new(catalog::bundled());
//! let selection = BuildSelection::new()
//!     .with(Slot::Cpu, "PROD001")
//!     .with(Slot::Motherboard, "PROD010");
//! for issue in engine.evaluate(&selection).issues {
//!     println!("{}", issue);
//! }
//! ```
//!
//! [`BuildSelection`]: crate::build::BuildSelection

mod engine;
mod issue;
pub mod rules;

pub use engine::{CandidateFilter, CompatibilityEngine, Constraint, Evaluation};
pub use issue::{CompatibilityIssue, CompatibilityStatus, IssueKind, Severity};
