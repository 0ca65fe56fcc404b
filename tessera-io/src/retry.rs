//! Retry policy for the read address-latch phase.

/// How the engine re-attempts latching a read address after the bus
/// reports a failed close.
///
/// Only the latch phase of [`read_bytes`] consults this policy. Write
/// closes and the connectivity probe surface their first failure
/// directly.
///
/// [`read_bytes`]: crate::RegisterIo::read_bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RetryPolicy {
    /// Retry until the latch succeeds, with no backoff.
    ///
    /// This assumes transient bus faults (arbitration loss, a NACK from
    /// a busy device) clear on their own. A device that never
    /// acknowledges will hang the caller; use [`RetryPolicy::Limited`]
    /// where that risk is unacceptable.
    Unbounded,
    /// Give up after this many attempts.
    ///
    /// A limit of zero is treated as one attempt.
    Limited(u32),
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::Unbounded
    }
}

impl RetryPolicy {
    /// Whether the policy is spent after `attempts` failed attempts.
    pub fn exhausted(&self, attempts: u32) -> bool {
        match *self {
            RetryPolicy::Unbounded => false,
            RetryPolicy::Limited(max) => attempts >= max.max(1),
        }
    }
}
