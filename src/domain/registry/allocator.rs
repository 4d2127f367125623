//! Identity allocation for displays and groups.

use std::sync::atomic::{AtomicU64, Ordering};

/// Mints identifiers of the form `<prefix><n>`, with `n` starting at 1.
///
/// `n` comes from an atomic counter, so concurrent callers never receive
/// the same identifier, and an identifier is never handed out twice in a
/// process lifetime, even after the entity it named has been deleted.
#[derive(Debug)]
pub struct NameAllocator {
    prefix: String,
    next: AtomicU64,
}

impl NameAllocator {
    /// Creates an allocator whose first identifier is `<prefix>1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }

    /// Returns the prefix every identifier starts with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Allocates the next identifier.
    pub fn allocate(&self) -> String {
        // Relaxed suffices: uniqueness only needs the RMW to be atomic.
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn allocates_sequentially_from_one() {
        let allocator = NameAllocator::new("d");

        assert_eq!(allocator.allocate(), "d1");
        assert_eq!(allocator.allocate(), "d2");
        assert_eq!(allocator.allocate(), "d3");
    }

    #[test]
    fn prefixes_keep_kinds_apart() {
        let displays = NameAllocator::new("d");
        let groups = NameAllocator::new("g");

        assert_eq!(displays.allocate(), "d1");
        assert_eq!(groups.allocate(), "g1");
        assert_eq!(groups.prefix(), "g");
    }

    #[test]
    fn concurrent_allocation_never_collides() {
        let allocator = Arc::new(NameAllocator::new("d"));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let allocator = Arc::clone(&allocator);
                std::thread::spawn(move || {
                    (0..500).map(|_| allocator.allocate()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for name in handle.join().unwrap() {
                assert!(seen.insert(name), "duplicate name allocated");
            }
        }
        assert_eq!(seen.len(), 8 * 500);
    }

    proptest! {
        #[test]
        fn any_number_of_allocations_are_distinct(count in 1usize..300) {
            let allocator = NameAllocator::new("x");
            let names: HashSet<String> = (0..count).map(|_| allocator.allocate()).collect();
            prop_assert_eq!(names.len(), count);
        }
    }
}
