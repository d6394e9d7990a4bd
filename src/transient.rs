/*!
 * Values that clear themselves after a fixed time.
 *
 * Used for the error banner and the "copied" feedback. Setting a new value
 * aborts the pending expiry of the previous one, so only the latest value's
 * timer can clear the slot.
 */

use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    generation: u64,
    expiry: Option<JoinHandle<()>>,
}

/// A shared slot whose value expires
///
/// Clones share the same slot. Must be set from within a tokio runtime.
#[derive(Debug)]
pub struct Transient<T> {
    inner: Arc<Mutex<Slot<T>>>,
}

impl<T> Clone for Transient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Transient<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Slot {
                value: None,
                generation: 0,
                expiry: None,
            })),
        }
    }
}

impl<T: Clone + Send + 'static> Transient<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` and schedule it to clear after `ttl`
    pub fn set(&self, value: T, ttl: Duration) {
        let mut slot = self.inner.lock();
        if let Some(previous) = slot.expiry.take() {
            previous.abort();
        }
        slot.generation += 1;
        slot.value = Some(value);

        let generation = slot.generation;
        let weak = Arc::downgrade(&self.inner);
        slot.expiry = Some(tokio::spawn(expire_after(weak, generation, ttl)));
    }

    /// Clear immediately and cancel the pending expiry
    pub fn clear(&self) {
        let mut slot = self.inner.lock();
        if let Some(previous) = slot.expiry.take() {
            previous.abort();
        }
        slot.generation += 1;
        slot.value = None;
    }

    pub fn get(&self) -> Option<T> {
        self.inner.lock().value.clone()
    }

    pub fn is_set(&self) -> bool {
        self.inner.lock().value.is_some()
    }
}

async fn expire_after<T>(slot: Weak<Mutex<Slot<T>>>, generation: u64, ttl: Duration) {
    tokio::time::sleep(ttl).await;
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let mut slot = slot.lock();
    // A newer value may have been stored after this timer fired but before it got the lock
    if slot.generation == generation {
        slot.value = None;
        slot.expiry = None;
    }
}
