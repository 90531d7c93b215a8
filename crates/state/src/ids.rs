//! Id source for categories and tags created at runtime.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Hands out strictly increasing ids derived from the wall clock.
///
/// Each id is the current Unix time in milliseconds, bumped past the last id
/// issued so two additions within one millisecond (or a clock step
/// backwards) still get distinct ids. The floor keeps runtime ids clear of
/// seeded ones.
#[derive(Debug)]
pub struct MonotonicIds {
    last: AtomicI64,
}

impl MonotonicIds {
    /// A source whose ids are all greater than `floor`.
    #[must_use]
    pub const fn above(floor: i64) -> Self {
        Self {
            last: AtomicI64::new(floor),
        }
    }

    /// Next id.
    pub fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last.saturating_add(1));
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}

impl Default for MonotonicIds {
    fn default() -> Self {
        Self::above(0)
    }
}
