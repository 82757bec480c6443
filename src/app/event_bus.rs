//! Abonnenten-Liste für Draw-Events mit begrenztem Event-Log.

use super::events::{DrawEvent, DrawEventKind};

/// Handle zum späteren Abmelden eines Abonnenten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&DrawEvent)>;

struct Subscriber {
    id: SubscriptionId,
    /// `None` = alle Kanäle
    kind: Option<DrawEventKind>,
    callback: Callback,
}

/// Verteilt Draw-Events an registrierte Callbacks und speichert sie in Reihenfolge.
#[derive(Default)]
pub struct DrawEventBus {
    subscribers: Vec<Subscriber>,
    next_id: u64,
    log: Vec<DrawEvent>,
}

impl DrawEventBus {
    const MAX_LOG_ENTRIES: usize = 1000;

    /// Erstellt einen Bus ohne Abonnenten.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Callback für einen Kanal.
    pub fn subscribe(
        &mut self,
        kind: DrawEventKind,
        callback: impl FnMut(&DrawEvent) + 'static,
    ) -> SubscriptionId {
        self.add(Some(kind), Box::new(callback))
    }

    /// Registriert einen Callback für alle Kanäle.
    pub fn subscribe_all(&mut self, callback: impl FnMut(&DrawEvent) + 'static) -> SubscriptionId {
        self.add(None, Box::new(callback))
    }

    fn add(&mut self, kind: Option<DrawEventKind>, callback: Callback) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscribers.push(Subscriber { id, kind, callback });
        id
    }

    /// Meldet einen Abonnenten ab. Gibt `false` zurück, wenn die ID unbekannt ist.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Anzahl registrierter Abonnenten.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Verteilt ein Event an alle passenden Abonnenten (in Registrierungsreihenfolge).
    pub fn emit(&mut self, event: DrawEvent) {
        let kind = event.kind();
        log::debug!("Draw-Event '{}': {:?}", kind.name(), event);

        for subscriber in &mut self.subscribers {
            if subscriber.kind.is_none() || subscriber.kind == Some(kind) {
                (subscriber.callback)(&event);
            }
        }

        if self.log.len() >= Self::MAX_LOG_ENTRIES {
            self.log.drain(..Self::MAX_LOG_ENTRIES / 2);
        }
        self.log.push(event);
    }

    /// Liefert eine read-only Sicht auf alle geloggten Events.
    pub fn entries(&self) -> &[DrawEvent] {
        &self.log
    }

    /// Entnimmt alle geloggten Events.
    pub fn drain(&mut self) -> Vec<DrawEvent> {
        std::mem::take(&mut self.log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn subscriber_only_sees_its_channel() {
        let mut bus = DrawEventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        bus.subscribe(DrawEventKind::Undo, move |e| sink.borrow_mut().push(e.clone()));

        bus.emit(DrawEvent::Finish);
        bus.emit(DrawEvent::Undo);

        assert_eq!(*seen.borrow(), vec![DrawEvent::Undo]);
        assert_eq!(bus.entries().len(), 2);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut bus = DrawEventBus::new();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = bus.subscribe_all(move |_| *counter.borrow_mut() += 1);

        bus.emit(DrawEvent::Cancel);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.emit(DrawEvent::Cancel);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn log_is_bounded() {
        let mut bus = DrawEventBus::new();
        for _ in 0..(DrawEventBus::MAX_LOG_ENTRIES + 10) {
            bus.emit(DrawEvent::Undo);
        }
        assert!(bus.entries().len() <= DrawEventBus::MAX_LOG_ENTRIES);

        let drained = bus.drain();
        assert!(!drained.is_empty());
        assert!(bus.entries().is_empty());
    }
}
