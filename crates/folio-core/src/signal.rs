use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

new_key_type! {
    /// Stable handle to one subscription. Removing it never disturbs the
    /// keys of other subscribers.
    pub struct SubKey;
}

pub struct Signal<T: 'static>(Rc<Inner<T>>);

struct Inner<T> {
    value: RefCell<T>,
    subs: RefCell<SlotMap<SubKey, Rc<dyn Fn(&T)>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(Inner {
            value: RefCell::new(value),
            subs: RefCell::new(SlotMap::with_key()),
        }))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.value.borrow().clone()
    }

    /// Read without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.value.borrow())
    }

    pub fn set(&self, v: T) {
        *self.0.value.borrow_mut() = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubKey {
        self.0.subs.borrow_mut().insert(Rc::new(f))
    }

    /// Idempotent; a stale key is silently ignored.
    pub fn unsubscribe(&self, key: SubKey) {
        self.0.subs.borrow_mut().remove(key);
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.subs.borrow().len()
    }

    // Callbacks are snapshotted first, so a subscriber may subscribe or
    // unsubscribe while being notified. Writing back to the same signal
    // from inside its own subscriber is not supported: the value borrow
    // is held across each call.
    fn notify(&self) {
        let snapshot: SmallVec<[Rc<dyn Fn(&T)>; 4]> =
            self.0.subs.borrow().values().cloned().collect();
        for f in snapshot {
            f(&self.0.value.borrow());
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
