//! Per-key async read/write locks.
//!
//! Each key gets its own `tokio::sync::RwLock`, created on first use. The
//! table counts the callers currently waiting on or holding a key and drops
//! the entry when that count returns to zero, including when a waiting
//! future is cancelled. Unrelated keys never contend.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock};

struct Entry {
    lock: Arc<RwLock<()>>,
    users: usize,
}

/// A table of locks keyed by entity identifier.
pub struct KeyedLocks<K> {
    entries: Mutex<HashMap<K, Entry>>,
}

impl<K> KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Waits for shared access to `key`.
    pub async fn read(&self, key: &K) -> KeyGuard<'_, K> {
        let checkout = self.checkout(key);
        let guard = Arc::clone(&checkout.lock).read_owned().await;
        KeyGuard {
            _held: Held::Read(guard),
            _checkout: checkout,
        }
    }

    /// Waits for exclusive access to `key`.
    pub async fn write(&self, key: &K) -> KeyGuard<'_, K> {
        let checkout = self.checkout(key);
        let guard = Arc::clone(&checkout.lock).write_owned().await;
        KeyGuard {
            _held: Held::Write(guard),
            _checkout: checkout,
        }
    }

    /// Number of keys with a live entry.
    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    fn table(&self) -> MutexGuard<'_, HashMap<K, Entry>> {
        // The table is only touched in short, non-panicking sections.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers one more user of `key` before any await point.
    fn checkout(&self, key: &K) -> Checkout<'_, K> {
        let mut table = self.table();
        let entry = table.entry(key.clone()).or_insert_with(|| Entry {
            lock: Arc::new(RwLock::new(())),
            users: 0,
        });
        entry.users += 1;
        Checkout {
            locks: self,
            key: key.clone(),
            lock: Arc::clone(&entry.lock),
        }
    }
}

impl<K> Default for KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// One counted use of a key. Dropping it, whether the lock was acquired or
/// the wait was abandoned, gives the use back.
struct Checkout<'a, K>
where
    K: Eq + Hash + Clone,
{
    locks: &'a KeyedLocks<K>,
    key: K,
    lock: Arc<RwLock<()>>,
}

impl<K> Drop for Checkout<'_, K>
where
    K: Eq + Hash + Clone,
{
    fn drop(&mut self) {
        let mut table = self.locks.table();
        if let Some(entry) = table.get_mut(&self.key) {
            entry.users -= 1;
            if entry.users == 0 {
                table.remove(&self.key);
            }
        }
    }
}

enum Held {
    Read(#[allow(dead_code)] OwnedRwLockReadGuard<()>),
    Write(#[allow(dead_code)] OwnedRwLockWriteGuard<()>),
}

/// Access to one key, released on drop.
// Field order matters: the lock guard is released before the checkout.
pub struct KeyGuard<'a, K>
where
    K: Eq + Hash + Clone,
{
    _held: Held,
    _checkout: Checkout<'a, K>,
}
