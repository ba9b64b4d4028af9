//! Shared helpers for factories.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter shared by every factory so generated values never collide within a test binary.
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Next unique ID shaped like a nanoid (21 characters), zero padded digits.
pub fn next_nanoid() -> String {
    format!("{:021}", next_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nanoids_have_expected_length_and_differ() {
        let a = next_nanoid();
        let b = next_nanoid();

        assert_eq!(a.len(), 21);
        assert_ne!(a, b);
    }
}
