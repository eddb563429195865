//! Monotonic time source

/// Monotonic millisecond clock
///
/// Counts milliseconds since start. Must never go backwards.
pub trait Clock {
    /// Milliseconds elapsed since start
    fn now_ms(&self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
