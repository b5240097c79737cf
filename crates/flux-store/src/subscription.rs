//! Subscriber list and unsubscribe handles

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Callback invoked once per dispatch with the dispatched action
pub type Subscriber<A> = Rc<dyn Fn(&A)>;

/// Ordered subscriber list shared between a store and its unsubscribe handles
pub(crate) type SubscriberList<A> = Rc<RefCell<Vec<Subscriber<A>>>>;

/// One-shot handle returned by `subscribe`
///
/// Removes the subscribed callback from the list it was added to. Only the
/// first call has an effect; the handle does not keep the store alive.
pub struct Unsubscribe<A> {
    subscribers: Weak<RefCell<Vec<Subscriber<A>>>>,
    subscriber: Subscriber<A>,
    used: Cell<bool>,
}

impl<A> Unsubscribe<A> {
    pub(crate) fn new(subscribers: &SubscriberList<A>, subscriber: Subscriber<A>) -> Self {
        Self {
            subscribers: Rc::downgrade(subscribers),
            subscriber,
            used: Cell::new(false),
        }
    }

    /// Remove the subscriber
    ///
    /// Removes the first entry that is the same callback instance, so a
    /// callback subscribed twice stays subscribed once. Returns `true` if an
    /// entry was removed; repeated calls return `false` and change nothing.
    pub fn unsubscribe(&self) -> bool {
        if self.used.replace(true) {
            return false;
        }

        let Some(subscribers) = self.subscribers.upgrade() else {
            return false;
        };

        let mut subscribers = subscribers.borrow_mut();
        match subscribers
            .iter()
            .position(|s| Rc::ptr_eq(s, &self.subscriber))
        {
            Some(index) => {
                subscribers.remove(index);
                log::debug!(
                    "Unsubscribed listener ({} remaining)",
                    subscribers.len()
                );
                true
            }
            None => false,
        }
    }

    /// Whether `unsubscribe` has already been called on this handle
    pub fn is_used(&self) -> bool {
        self.used.get()
    }
}

impl<A> std::fmt::Debug for Unsubscribe<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unsubscribe")
            .field("used", &self.used.get())
            .finish()
    }
}
