use std::sync::Arc;

use crate::catalog::CatalogLookup;
use crate::compat::{CompatibilityEngine, CompatibilityStatus, Evaluation};
use crate::storage::KeyValueStore;

use super::clock::{Clock, SystemClock};
use super::saved::{SavedBuild, SavedBuilds};
use super::{BuildSelection, SessionEvent, Slot};

/// One shopper's build in progress.
///
/// Every mutation re-evaluates the selection, so [`evaluation`](Self::evaluation) is
/// always current. Saved builds are read from the store once, at construction.
pub struct BuildSession<'c, C: ?Sized, S> {
    engine: CompatibilityEngine<'c, C>,
    selection: BuildSelection,
    evaluation: Evaluation,
    saved: SavedBuilds<S>,
    clock: Arc<dyn Clock>,
    events: Vec<SessionEvent>,
}

impl<'c, C: CatalogLookup + ?Sized, S: KeyValueStore> BuildSession<'c, C, S> {
    pub fn new(catalog: &'c C, store: S) -> Self {
        Self::with_engine(CompatibilityEngine::new(catalog), store)
    }

    pub fn with_engine(engine: CompatibilityEngine<'c, C>, store: S) -> Self {
        let selection = BuildSelection::new();
        let evaluation = engine.evaluate(&selection);
        Self {
            engine,
            selection,
            evaluation,
            saved: SavedBuilds::load(store),
            clock: Arc::new(SystemClock),
            events: Vec::new(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn selection(&self) -> &BuildSelection {
        &self.selection
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn status(&self) -> CompatibilityStatus {
        self.evaluation.status()
    }

    pub fn engine(&self) -> &CompatibilityEngine<'c, C> {
        &self.engine
    }

    pub fn saved_builds(&self) -> &[SavedBuild] {
        self.saved.all()
    }

    pub fn select(&mut self, slot: Slot, product_id: impl Into<String>) -> &Evaluation {
        let product_id = product_id.into();
        tracing::debug!(target: "build", %slot, product_id = %product_id, "component selected");
        self.selection.select(slot, product_id.clone());
        self.events
            .push(SessionEvent::ComponentSelected { slot, product_id });
        self.refresh()
    }

    pub fn remove(&mut self, slot: Slot) -> &Evaluation {
        tracing::debug!(target: "build", %slot, "component removed");
        self.selection.remove(slot);
        self.events.push(SessionEvent::ComponentRemoved { slot });
        self.refresh()
    }

    /// Snapshots the current selection and metrics. The snapshot is kept for the
    /// session even if the store rejects the write.
    pub fn save(&mut self, name: impl Into<String>) -> &SavedBuild {
        let now = self.clock.now();
        let build = SavedBuild {
            id: self.saved.next_id(now),
            name: name.into(),
            components: self.selection.clone(),
            total_price: self.evaluation.total_price,
            power_consumption: self.evaluation.total_power,
            created_at: now,
        };
        let id = build.id.clone();
        self.events.push(SessionEvent::BuildSaved {
            build_id: id.clone(),
            name: build.name.clone(),
        });

        if self.saved.append(build) {
            tracing::debug!(target: "build", build_id = %id, "build saved");
        } else {
            tracing::warn!(target: "build", build_id = %id, "build kept in session only");
        }
        let index = self.saved.len() - 1;
        &self.saved.all()[index]
    }

    /// Replaces the selection with a saved build's components. Unknown ids change
    /// nothing and return false.
    pub fn load(&mut self, build_id: &str) -> bool {
        let Some(build) = self.saved.get(build_id) else {
            tracing::debug!(target: "build", build_id, "no saved build with this id");
            return false;
        };
        self.selection = build.components.clone();
        self.events.push(SessionEvent::BuildLoaded {
            build_id: build_id.to_string(),
        });
        tracing::debug!(target: "build", build_id, "build loaded");
        self.refresh();
        true
    }

    /// A non-empty build with no error-severity issues.
    pub fn checkout_ready(&self) -> bool {
        !self.selection.is_empty() && !self.evaluation.has_blocking_issues()
    }

    pub fn pending_events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Drains queued events in the order they happened.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn refresh(&mut self) -> &Evaluation {
        self.evaluation = self.engine.evaluate(&self.selection);
        &self.evaluation
    }
}
