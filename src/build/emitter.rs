use event_emitter_rs::EventEmitter;

use super::SessionEvent;

/// Relays drained [`SessionEvent`]s to listeners registered by event type.
///
/// ```ignore
/// use part_picker::build::SessionEmitter;
///
/// let mut emitter = SessionEmitter::new();
/// emitter.on("BuildSaved", |payload| println!("saved: {}", payload));
/// emitter.relay(session.take_events());
/// ```
///
/// Listeners run on the emitter's own threads, so they may fire after `relay` returns.
pub struct SessionEmitter {
    event_emitter: EventEmitter,
}

impl Default for SessionEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionEmitter {
    pub fn new() -> Self {
        Self {
            event_emitter: EventEmitter::new(),
        }
    }

    /// Registers `listener` for one event type; it receives the JSON payload.
    pub fn on<F>(&mut self, event_type: &str, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event_type, listener)
    }

    pub fn emit(&mut self, event: &SessionEvent) {
        self.event_emitter.emit(event.event_type(), event.payload());
    }

    /// Emits every event in order. Returns how many were emitted.
    pub fn relay(&mut self, events: impl IntoIterator<Item = SessionEvent>) -> usize {
        let mut emitted = 0;
        for event in events {
            self.emit(&event);
            emitted += 1;
        }
        emitted
    }
}
