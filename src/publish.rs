/// A value holder the presentation side can read between ticks.
///
/// `set` only bumps the version and notifies subscribers when the value
/// actually changes, so same-state self-loops publish nothing.
pub struct Published<T> {
    value: T,
    version: u64,
    subscribers: Vec<Box<dyn FnMut(&T) + Send + Sync>>,
}

impl<T: PartialEq + Clone> Published<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            version: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Incremented once per observed change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns whether the value changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.version += 1;
        for sub in &mut self.subscribers {
            sub(&self.value);
        }
        true
    }

    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.value);
        self.set(next)
    }

    /// The hook is not called with the current value, only with later changes.
    pub fn subscribe(&mut self, f: impl FnMut(&T) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(f));
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Published<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Published")
            .field("value", &self.value)
            .field("version", &self.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn subscribers_only_see_changes() {
        let hits = Arc::new(AtomicU32::new(0));
        let seen = hits.clone();
        let mut cell = Published::new(160i16);
        cell.subscribe(move |_| {
            seen.fetch_add(1, Ordering::Relaxed);
        });

        assert!(!cell.set(160));
        assert!(cell.set(80));
        assert!(!cell.set(80));
        assert!(cell.update(|v| v + 8));

        assert_eq!(*cell.get(), 88);
        assert_eq!(cell.version(), 2);
        assert_eq!(hits.load(Ordering::Relaxed), 2);
    }
}
