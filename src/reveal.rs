use std::collections::BTreeSet;
use std::time::Duration;

use thiserror::Error;

/// Fraction of an element's area that must be inside the viewport before it
/// counts as seen.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Delay step for the staggered variant; card `i` reveals `i * STAGGER_STEP`
/// after its intersection fires.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevealError {
    #[error("IntersectionObserver API is not available in this environment")]
    ObserverUnsupported,
}

/// Lifecycle of a single tracked card. There is no path back to `Unseen`;
/// once a card has animated in it stays in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Unseen,
    Visible,
}

/// Grow-only set of card indices that have entered the viewport.
///
/// Rendering derives each card's transition classes purely from membership
/// here, so re-renders are idempotent and the set is the single source of
/// truth for reveal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet {
    seen: BTreeSet<usize>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set with every index in `0..count` already visible, used when the
    /// observer API is missing and everything must show at once.
    pub fn saturated(count: usize) -> Self {
        Self {
            seen: (0..count).collect(),
        }
    }

    /// Marks `index` visible. Returns `true` only the first time; repeat
    /// insertions are suppressed and leave the set unchanged.
    pub fn insert(&mut self, index: usize) -> bool {
        self.seen.insert(index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    pub fn phase(&self, index: usize) -> RevealPhase {
        if self.contains(index) {
            RevealPhase::Visible
        } else {
            RevealPhase::Unseen
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// True once at least `REVEAL_THRESHOLD` of the element is in view.
pub fn crosses_reveal_threshold(intersection_ratio: f64) -> bool {
    intersection_ratio >= REVEAL_THRESHOLD
}

/// Cascade delay for the staggered variant: `index * step`.
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step * index as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_is_empty() {
        let set = RevealSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.phase(0), RevealPhase::Unseen);
    }

    #[test]
    fn test_insert_is_one_way() {
        let mut set = RevealSet::new();
        assert!(set.insert(2));
        assert!(set.contains(2));
        assert_eq!(set.phase(2), RevealPhase::Visible);

        // No removal path exists; scrolling back out cannot undo a reveal.
        // The only mutation available keeps membership.
        assert!(!set.insert(2));
        assert!(set.contains(2));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_keeps_size() {
        let mut set = RevealSet::new();
        assert!(set.insert(5));
        let size_after_first = set.len();

        // Intersection toggling in and out fires the callback repeatedly,
        // but the set only grows once per index.
        for _ in 0..4 {
            assert!(!set.insert(5));
        }
        assert_eq!(set.len(), size_after_first);
    }

    #[test]
    fn test_insertion_follows_crossing_order() {
        let mut set = RevealSet::new();

        // Element 1 scrolls into view before element 0.
        assert!(set.insert(1));
        assert!(set.contains(1));
        assert!(!set.contains(0));

        assert!(set.insert(0));
        assert!(set.contains(0));
        assert!(set.contains(1));
        assert_eq!(set.len(), 2);
        assert_eq!(set.phase(2), RevealPhase::Unseen);
    }

    #[test]
    fn test_threshold_predicate() {
        assert!(!crosses_reveal_threshold(0.0));
        assert!(!crosses_reveal_threshold(0.05));
        assert!(!crosses_reveal_threshold(0.0999));
        assert!(crosses_reveal_threshold(REVEAL_THRESHOLD));
        assert!(crosses_reveal_threshold(0.5));
        assert!(crosses_reveal_threshold(1.0));
    }

    #[test]
    fn test_stagger_delay_scales_with_index() {
        assert_eq!(stagger_delay(0, STAGGER_STEP), Duration::ZERO);
        assert_eq!(stagger_delay(1, STAGGER_STEP), Duration::from_millis(100));
        assert_eq!(stagger_delay(3, STAGGER_STEP), Duration::from_millis(300));
        assert_eq!(stagger_delay(7, STAGGER_STEP), Duration::from_millis(700));
    }

    #[test]
    fn test_saturated_covers_every_index() {
        let set = RevealSet::saturated(4);
        assert_eq!(set.len(), 4);
        for index in 0..4 {
            assert!(set.contains(index));
            assert_eq!(set.phase(index), RevealPhase::Visible);
        }
        assert!(!set.contains(4));

        let empty = RevealSet::saturated(0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_observer_unsupported_message() {
        let err = RevealError::ObserverUnsupported;
        assert!(err.to_string().contains("IntersectionObserver"));
    }
}
