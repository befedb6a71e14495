//! Conversion counter.

/// Monotonic source of identity keys for one conversion.
///
/// A single instance is threaded `&mut` through every recursive call of a
/// top-level conversion, so keys are unique and strictly increasing in
/// document pre-order. The entry point creates a fresh one per call; callers
/// wanting key continuity across calls supply their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    val: usize,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next key to be assigned.
    pub fn value(&self) -> usize {
        self.val
    }

    /// Return the current key and advance.
    pub fn assign(&mut self) -> usize {
        let key = self.val;
        self.val += 1;
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_is_monotonic() {
        let mut counter = Counter::new();
        assert_eq!(counter.assign(), 0);
        assert_eq!(counter.assign(), 1);
        assert_eq!(counter.assign(), 2);
        assert_eq!(counter.value(), 3);
    }
}
