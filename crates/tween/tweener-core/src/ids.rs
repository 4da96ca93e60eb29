//! Tween identifiers and their allocator.

use serde::{Deserialize, Serialize};

/// Identifies one tween record for the lifetime of its owner.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TweenId(pub u32);

/// Monotonic allocator for TweenId.
#[derive(Default, Debug, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> TweenId {
        let id = TweenId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc(), TweenId(0));
        assert_eq!(alloc.alloc(), TweenId(1));
    }
}
