use serde::Serialize;

use super::Slot;

/// Something a [`BuildSession`](super::BuildSession) did, queued until drained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum SessionEvent {
    ComponentSelected { slot: Slot, product_id: String },
    ComponentRemoved { slot: Slot },
    BuildSaved { build_id: String, name: String },
    BuildLoaded { build_id: String },
}

impl SessionEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::ComponentSelected { .. } => "ComponentSelected",
            SessionEvent::ComponentRemoved { .. } => "ComponentRemoved",
            SessionEvent::BuildSaved { .. } => "BuildSaved",
            SessionEvent::BuildLoaded { .. } => "BuildLoaded",
        }
    }

    /// JSON form handed to listeners.
    pub fn payload(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
