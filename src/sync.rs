use std::sync::{Arc, PoisonError};

#[cfg(not(all(test, feature = "loom")))]
use std::sync::RwLock;

#[cfg(all(test, feature = "loom"))]
use loom::sync::RwLock;

/// A shared value that can be swapped out wholesale.
///
/// Readers get an `Arc` to whichever value was installed when they looked, so a swap never
/// disturbs a call already running against the previous value.
pub(crate) struct Slot<T> {
    inner: RwLock<Arc<T>>,
}

impl<T> Slot<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            inner: RwLock::new(Arc::new(value)),
        }
    }

    pub(crate) fn get(&self) -> Arc<T> {
        // A poisoned slot still holds a whole `Arc`.
        self.inner.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Installs `value`, returning the previous one.
    pub(crate) fn replace(&self, value: Arc<T>) -> Arc<T> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        core::mem::replace(&mut *guard, value)
    }

    /// Installs `value` only if `current` is still the installed value. Returns whether it did.
    pub(crate) fn replace_if(&self, current: &Arc<T>, value: Arc<T>) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if !Arc::ptr_eq(&*guard, current) {
            return false;
        }
        *guard = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "loom"))]
    #[test]
    fn naive_test() {
        let slot = Slot::new(1u8);
        assert_eq!(*slot.get(), 1);

        let previous = slot.replace(Arc::new(2));
        assert_eq!(*previous, 1);
        assert_eq!(*slot.get(), 2);
    }

    #[cfg(not(feature = "loom"))]
    #[test]
    fn replace_if_checks_identity() {
        let slot = Slot::new(1u8);
        let installed = slot.get();
        let stranger = Arc::new(1u8);

        assert!(!slot.replace_if(&stranger, Arc::new(3)));
        assert_eq!(*slot.get(), 1);

        assert!(slot.replace_if(&installed, Arc::new(2)));
        assert_eq!(*slot.get(), 2);
    }

    #[cfg(not(feature = "loom"))]
    #[test]
    fn reader_keeps_its_value_across_replace() {
        let slot = Slot::new(String::from("old"));

        let held = slot.get();
        slot.replace(Arc::new(String::from("new")));

        assert_eq!(*held, "old");
        assert_eq!(*slot.get(), "new");
        assert_eq!(Arc::strong_count(&held), 1);
    }

    #[cfg(feature = "loom")]
    #[derive(Debug, PartialEq)]
    struct AStructForLoom {
        a_value: u8,
    }

    #[cfg(feature = "loom")]
    #[test]
    fn test_slot_swap() {
        use loom::thread;

        loom::model(|| {
            let slot = Arc::new(Slot::new(AStructForLoom { a_value: 1 }));
            let writer = slot.clone();
            let reader = slot.clone();

            let t1 = thread::spawn(move || {
                writer.replace(Arc::new(AStructForLoom { a_value: 2 })).a_value
            });

            let t2 = thread::spawn(move || reader.get().a_value);

            assert_eq!(t1.join().unwrap(), 1);
            let seen = t2.join().unwrap();
            assert!(seen == 1 || seen == 2);
            assert_eq!(slot.get().a_value, 2);
        });
    }
}
