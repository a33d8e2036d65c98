// crates/fieldsign-core/src/runtime/clock.rs
// ============================================================================
// Module: Signing Clocks
// Description: System and fixed implementations of the clock interface.
// Purpose: Supply the signing instant to the runtime.
// Dependencies: chrono, crate::interfaces
// ============================================================================

//! ## Overview
//! Production signers read [`SystemClock`]; tests pin the instant with
//! [`FixedClock`].

use chrono::DateTime;
use chrono::Utc;

use crate::interfaces::Clock;

/// Clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    /// Instant returned by every call.
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock pinned to `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
