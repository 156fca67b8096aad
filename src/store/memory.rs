//! In-process [`Store`] implementation.
//!
//! Used when the plugin runs outside a host (tests, previews) and as the
//! reference behavior hosts are expected to match.
//!
//! TRADE-OFFS
//! ==========
//! Listeners may dispatch. Such actions are queued and reduced after the
//! current notification round finishes, so every listener sees snapshots in
//! dispatch order and no `RefCell` is borrowed twice.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::actions::{Action, reduce};
use super::types::HostState;
use super::{Listener, Store, SubscriptionId};

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

pub struct MemoryStore {
    state: RefCell<Rc<HostState>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    /// Ids of the listeners checked out by the running notification round.
    checked_out: RefCell<Vec<SubscriptionId>>,
    /// Unsubscribes that arrived while the listener list was checked out.
    removed: RefCell<Vec<SubscriptionId>>,
    queue: RefCell<VecDeque<Action>>,
    dispatching: Cell<bool>,
    next_id: Cell<u64>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(HostState::default())
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new(initial: HostState) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial)),
            listeners: RefCell::new(Vec::new()),
            checked_out: RefCell::new(Vec::new()),
            removed: RefCell::new(Vec::new()),
            queue: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
            next_id: Cell::new(1),
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn drain_queue(&self) {
        loop {
            let Some(action) = self.queue.borrow_mut().pop_front() else {
                break;
            };
            tracing::trace!(action = action.kind(), "reduce");
            let next = Rc::new(reduce(&self.state.borrow(), &action));
            *self.state.borrow_mut() = Rc::clone(&next);
            self.notify(&next);
        }
    }

    fn notify(&self, snapshot: &HostState) {
        let mut current = std::mem::take(&mut *self.listeners.borrow_mut());
        *self.checked_out.borrow_mut() = current.iter().map(|(id, _)| *id).collect();
        for (_, listener) in &mut current {
            listener(snapshot);
        }

        let mut listeners = self.listeners.borrow_mut();
        let added = std::mem::take(&mut *listeners);
        current.extend(added);
        self.checked_out.borrow_mut().clear();
        let removed = std::mem::take(&mut *self.removed.borrow_mut());
        current.retain(|(id, _)| !removed.contains(id));
        *listeners = current;
    }
}

impl Store for MemoryStore {
    fn get_state(&self) -> Rc<HostState> {
        Rc::clone(&self.state.borrow())
    }

    fn dispatch(&self, action: Action) {
        self.queue.borrow_mut().push_back(action);
        if self.dispatching.replace(true) {
            return;
        }
        self.drain_queue();
        self.dispatching.set(false);
    }

    fn subscribe(&self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        if listeners.len() != before {
            return true;
        }
        drop(listeners);

        let mut removed = self.removed.borrow_mut();
        if self.checked_out.borrow().contains(&id) && !removed.contains(&id) {
            removed.push(id);
            return true;
        }
        false
    }
}
