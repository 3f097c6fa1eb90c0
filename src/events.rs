//! Typed event channels for decoupled notification.
//!
//! One channel per event kind rather than a single untyped bus, so
//! subscribers get compile-time checked payloads. The whole editor is
//! single-threaded and cooperative, so channels use `Rc`-friendly interior
//! mutability and no locks; what they do have to survive is reentrancy — a
//! handler subscribing or unsubscribing while a publish is in flight.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::element::{ElementId, PropValue};

/// Handle returned by [`Channel::subscribe`], used to unsubscribe.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
}

/// A single-threaded publish/subscribe channel for one event kind.
pub struct Channel<T> {
    subscribers: RefCell<Vec<(u64, Box<dyn Fn(&T)>)>>,
    /// Unsubscribes requested while a publish had the list taken out.
    pending_removals: RefCell<Vec<u64>>,
    /// Events published from inside a handler, delivered after the outer
    /// dispatch finishes.
    queued: RefCell<VecDeque<T>>,
    dispatching: Cell<bool>,
    next_id: Cell<u64>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Channel<T> {
    pub fn new() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
            pending_removals: RefCell::new(Vec::new()),
            queued: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
            next_id: Cell::new(0),
        }
    }

    pub fn subscribe(&self, handler: impl Fn(&T) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Box::new(handler)));
        Subscription { id }
    }

    /// Remove a subscriber. Safe to call from inside a handler.
    pub fn unsubscribe(&self, subscription: Subscription) {
        let mut subs = self.subscribers.borrow_mut();
        if let Some(pos) = subs.iter().position(|(id, _)| *id == subscription.id) {
            subs.remove(pos);
        } else {
            // Currently taken out by a publish in flight
            self.pending_removals.borrow_mut().push(subscription.id);
        }
    }

    /// Deliver `event` to every current subscriber.
    ///
    /// The subscriber list is taken out for the duration of a dispatch, so
    /// handlers may subscribe or unsubscribe without hitting a borrow
    /// conflict; new subscribers only see later events. A publish from
    /// inside a handler is queued and delivered after the outer dispatch
    /// finishes, in publish order — cascading mutations (a property change
    /// triggering another) lose no events.
    pub fn publish(&self, event: &T)
    where
        T: Clone,
    {
        if self.dispatching.get() {
            self.queued.borrow_mut().push_back(event.clone());
            return;
        }
        self.dispatching.set(true);
        self.dispatch(event);
        loop {
            // The queue borrow must end before dispatch runs handlers
            let next = self.queued.borrow_mut().pop_front();
            match next {
                Some(queued) => self.dispatch(&queued),
                None => break,
            }
        }
        self.dispatching.set(false);
    }

    fn dispatch(&self, event: &T) {
        let taken = std::mem::take(&mut *self.subscribers.borrow_mut());
        for (id, handler) in &taken {
            let removed = self.pending_removals.borrow().contains(id);
            if !removed {
                handler(event);
            }
        }
        let removals = std::mem::take(&mut *self.pending_removals.borrow_mut());
        let mut subs = self.subscribers.borrow_mut();
        let added_during_dispatch = std::mem::take(&mut *subs);
        subs.extend(taken.into_iter().filter(|(id, _)| !removals.contains(id)));
        subs.extend(added_during_dispatch);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

/// Payload for `selected` / `deselected`.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionEvent {
    pub id: ElementId,
}

/// Payload for `lock_changed`.
#[derive(Clone, Debug, PartialEq)]
pub struct LockEvent {
    pub id: ElementId,
    pub locked: bool,
}

/// Payload for `property_changed`. Emitted only when the value actually
/// changed; no-op writes are silent.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyEvent {
    pub id: ElementId,
    pub key: String,
    pub old: Option<PropValue>,
    pub new: PropValue,
}

/// Payload for `removed`.
#[derive(Clone, Debug, PartialEq)]
pub struct RemovalEvent {
    pub id: ElementId,
}

/// All channels the core publishes on, one per event kind.
#[derive(Default)]
pub struct EventBus {
    pub selected: Channel<SelectionEvent>,
    pub deselected: Channel<SelectionEvent>,
    pub lock_changed: Channel<LockEvent>,
    pub property_changed: Channel<PropertyEvent>,
    pub removed: Channel<RemovalEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }
}
