use serde::Serialize;

use super::{BuildSelection, Slot};
use crate::compat::Evaluation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", content = "slot", rename_all = "lowercase")]
pub enum Screen {
    /// The category picker.
    Categories,
    /// The product list for one slot.
    Components(Slot),
}

/// Screen state of the guided builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderNavigator {
    screen: Screen,
}

impl Default for BuilderNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderNavigator {
    pub fn new() -> Self {
        Self {
            screen: Screen::Categories,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn current_slot(&self) -> Option<Slot> {
        match self.screen {
            Screen::Components(slot) => Some(slot),
            Screen::Categories => None,
        }
    }

    /// Shows the product list for `slot`, from either screen.
    pub fn open(&mut self, slot: Slot) -> Screen {
        self.screen = Screen::Components(slot);
        self.screen
    }

    pub fn back(&mut self) -> Screen {
        self.screen = Screen::Categories;
        self.screen
    }

    /// "Next" needs the current slot filled and free of error-severity issues.
    pub fn can_advance(&self, selection: &BuildSelection, evaluation: &Evaluation) -> bool {
        self.current_slot()
            .is_some_and(|slot| selection.is_filled(slot) && !evaluation.blocks(slot))
    }

    /// Moves to the next unfilled slot after the current one, wrapping around.
    /// Returns to the category picker when every other slot is filled. Does nothing
    /// when [`can_advance`](Self::can_advance) is false.
    pub fn next(&mut self, selection: &BuildSelection, evaluation: &Evaluation) -> Screen {
        let Some(current) = self.current_slot() else {
            return self.screen;
        };
        if !self.can_advance(selection, evaluation) {
            tracing::debug!(target: "build", slot = %current, "next blocked");
            return self.screen;
        }

        let mut candidate = current.following();
        while candidate != current && selection.is_filled(candidate) {
            candidate = candidate.following();
        }
        self.screen = if candidate == current {
            Screen::Categories
        } else {
            Screen::Components(candidate)
        };
        self.screen
    }
}
