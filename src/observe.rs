//! Observable values with synchronous push notification.
//!
//! Every externally visible piece of model state lives in a [`Property`].
//! Observers run in registration order, on the same tick as the change,
//! with no batching. Notification passes (new, old).

use std::cell::RefCell;
use std::rc::Rc;

/// Handle returned by [`Property::observe`], used to tear the observer down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

type Listener<T> = Rc<dyn Fn(T, T)>;

struct Registry<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

pub struct Property<T: Copy + PartialEq> {
    inner: RefCell<Registry<T>>,
}

impl<T: Copy + PartialEq> Property<T> {
    pub fn new(value: T) -> Property<T> {
        Property {
            inner: RefCell::new(Registry { value, next_id: 1, listeners: Vec::new() }),
        }
    }

    #[inline]
    pub fn get(&self) -> T {
        self.inner.borrow().value
    }

    /// Stores `value` and notifies observers. Returns false when the value is
    /// unchanged, in which case nobody is notified. Crate-internal: outside
    /// callers mutate model state through the owning entity's methods, never
    /// by writing a property directly.
    pub(crate) fn set(&self, value: T) -> bool {
        let old = {
            let mut reg = self.inner.borrow_mut();
            if reg.value == value {
                return false;
            }
            let old = reg.value;
            reg.value = value;
            old
        };
        self.notify(value, old);
        true
    }

    pub fn observe(&self, f: impl Fn(T, T) + 'static) -> SubscriptionId {
        let mut reg = self.inner.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.listeners.push((id, Rc::new(f)));
        SubscriptionId(id)
    }

    pub fn unobserve(&self, id: SubscriptionId) -> bool {
        let mut reg = self.inner.borrow_mut();
        let before = reg.listeners.len();
        reg.listeners.retain(|(lid, _)| *lid != id.0);
        reg.listeners.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    // Snapshot the listener list before calling out, so an observer may
    // subscribe or unsubscribe on this same property without a borrow panic.
    fn notify(&self, new: T, old: T) {
        let snapshot: Vec<Listener<T>> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, f)| f.clone())
            .collect();
        for f in snapshot {
            f(new, old);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn set_notifies_with_new_and_old() {
        let p = Property::new(1i32);
        let seen: Rc<RefCell<Vec<(i32, i32)>>> = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        p.observe(move |new, old| s.borrow_mut().push((new, old)));
        assert!(p.set(5));
        assert_eq!(p.get(), 5);
        assert_eq!(seen.borrow().as_slice(), &[(5, 1)]);
    }

    #[test]
    fn equal_set_is_silent() {
        let p = Property::new(3i32);
        let count = Rc::new(RefCell::new(0usize));
        let c = count.clone();
        p.observe(move |_, _| *c.borrow_mut() += 1);
        assert!(!p.set(3));
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn observers_run_in_registration_order() {
        let p = Property::new(0i32);
        let order: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
        let a = order.clone();
        p.observe(move |_, _| a.borrow_mut().push(1));
        let b = order.clone();
        p.observe(move |_, _| b.borrow_mut().push(2));
        p.set(7);
        assert_eq!(order.borrow().as_slice(), &[1, 2]);
    }

    #[test]
    fn unobserve_stops_delivery() {
        let p = Property::new(0i32);
        let count = Rc::new(RefCell::new(0usize));
        let c = count.clone();
        let id = p.observe(move |_, _| *c.borrow_mut() += 1);
        p.set(1);
        assert!(p.unobserve(id));
        assert!(!p.unobserve(id));
        p.set(2);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn observer_may_unsubscribe_itself_during_notify() {
        let p = Rc::new(Property::new(0i32));
        let slot: Rc<RefCell<Option<SubscriptionId>>> = Rc::new(RefCell::new(None));
        let p2 = p.clone();
        let s2 = slot.clone();
        let fired = Rc::new(RefCell::new(0usize));
        let f2 = fired.clone();
        let id = p.observe(move |_, _| {
            *f2.borrow_mut() += 1;
            if let Some(id) = s2.borrow_mut().take() {
                p2.unobserve(id);
            }
        });
        *slot.borrow_mut() = Some(id);
        p.set(1);
        p.set(2);
        assert_eq!(*fired.borrow(), 1);
    }
}
