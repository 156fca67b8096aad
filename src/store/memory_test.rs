use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::store::types::{PlayerSelection, Post};

fn show(post_id: &str) -> Action {
    Action::ShowGlobalPlayer(PlayerSelection { post_id: post_id.into(), ..PlayerSelection::default() })
}

#[test]
fn dispatch_updates_snapshot() {
    let store = MemoryStore::default();
    let before = store.get_state();

    store.dispatch(show("p1"));

    let after = store.get_state();
    assert!(before.plugin.global_player.is_none());
    assert_eq!(after.plugin.global_player.as_ref().map(|s| s.post_id.as_str()), Some("p1"));
}

#[test]
fn listeners_receive_each_snapshot() {
    let store = MemoryStore::default();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(Box::new(move |state| {
        sink.borrow_mut().push(state.plugin.global_player.is_some());
    }));

    store.dispatch(show("p1"));
    store.dispatch(Action::CloseGlobalPlayer);

    assert_eq!(*seen.borrow(), [true, false]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = MemoryStore::default();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let id = store.subscribe(Box::new(move |_| *sink.borrow_mut() += 1));

    store.dispatch(show("p1"));
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.dispatch(show("p2"));

    assert_eq!(*count.borrow(), 1);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn listener_dispatch_is_queued_in_order() {
    let store = Rc::new(MemoryStore::default());
    let order = Rc::new(RefCell::new(Vec::new()));

    let inner = Rc::downgrade(&store);
    let sink = Rc::clone(&order);
    store.subscribe(Box::new(move |state| {
        let post_id = state.plugin.global_player.as_ref().map(|s| s.post_id.clone());
        sink.borrow_mut().push(post_id.clone());
        if post_id.as_deref() == Some("p1") {
            if let Some(store) = inner.upgrade() {
                store.dispatch(Action::CloseGlobalPlayer);
            }
        }
    }));

    store.dispatch(show("p1"));

    assert_eq!(*order.borrow(), [Some("p1".to_owned()), None]);
    assert!(store.get_state().plugin.global_player.is_none());
}

#[test]
fn listener_can_subscribe_and_unsubscribe_during_notify() {
    let store = Rc::new(MemoryStore::default());
    let weak = Rc::downgrade(&store);
    let own_id = Rc::new(RefCell::new(None));
    let own_id_inner = Rc::clone(&own_id);

    let id = store.subscribe(Box::new(move |_| {
        let Some(store) = weak.upgrade() else { return };
        if let Some(id) = own_id_inner.borrow_mut().take() {
            assert!(store.unsubscribe(id));
            store.subscribe(Box::new(|_| {}));
        }
    }));
    *own_id.borrow_mut() = Some(id);

    store.dispatch(show("p1"));

    assert_eq!(store.listener_count(), 1);
}

#[test]
fn unsubscribe_during_notify_rejects_unknown_ids() {
    let store = Rc::new(MemoryStore::default());
    let weak = Rc::downgrade(&store);
    let results = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&results);
    let own_id = Rc::new(RefCell::new(None));
    let own_id_inner = Rc::clone(&own_id);

    let id = store.subscribe(Box::new(move |_| {
        let Some(store) = weak.upgrade() else { return };
        let mut sink = sink.borrow_mut();
        sink.push(store.unsubscribe(SubscriptionId(999)));
        if let Some(id) = own_id_inner.borrow_mut().take() {
            sink.push(store.unsubscribe(id));
            sink.push(store.unsubscribe(id));
        }
    }));
    *own_id.borrow_mut() = Some(id);

    store.dispatch(show("p1"));

    assert_eq!(*results.borrow(), [false, true, false]);
    assert_eq!(store.listener_count(), 0);
    assert!(!store.unsubscribe(SubscriptionId(999)));
}

#[test]
fn received_post_is_visible_to_readers() {
    let store = MemoryStore::default();
    store.dispatch(Action::ReceivedPost(Post { id: "p1".into(), message: "hello".into(), ..Post::default() }));
    assert_eq!(store.get_state().posts["p1"].message, "hello");
}
