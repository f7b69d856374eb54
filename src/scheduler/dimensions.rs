//! Dimension samples and the render dedup cache

/// A sampled (width, height) pair, non-negative, transient.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The last dimensions at which a render was committed.
///
/// This is the sole deduplication mechanism: a render is skipped iff the
/// current sample equals the committed one exactly in both components.
/// Comparison is by value; a change in either axis alone invalidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionCache {
    last: Option<Dimensions>,
}

impl DimensionCache {
    /// A cache with no committed dimensions; the first sample always renders
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `current` equals the committed sample in both components
    pub fn matches(&self, current: Dimensions) -> bool {
        self.last == Some(current)
    }

    /// Record `current` as the committed dimensions
    pub fn commit(&mut self, current: Dimensions) {
        self.last = Some(current);
    }

    /// The committed dimensions, if any render has happened yet
    pub fn last(&self) -> Option<Dimensions> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cache_matches_nothing() {
        let cache = DimensionCache::new();
        assert!(!cache.matches(Dimensions::ZERO));
        assert!(!cache.matches(Dimensions::new(200.0, 100.0)));
        assert_eq!(cache.last(), None);
    }

    #[test]
    fn test_commit_then_match() {
        let mut cache = DimensionCache::new();
        cache.commit(Dimensions::new(200.0, 100.0));
        assert!(cache.matches(Dimensions::new(200.0, 100.0)));
        assert_eq!(cache.last(), Some(Dimensions::new(200.0, 100.0)));
    }

    #[test]
    fn test_single_axis_change_invalidates() {
        let mut cache = DimensionCache::new();
        cache.commit(Dimensions::new(200.0, 100.0));
        assert!(!cache.matches(Dimensions::new(210.0, 100.0)));
        assert!(!cache.matches(Dimensions::new(200.0, 90.0)));
    }

    #[test]
    fn test_recommit_replaces() {
        let mut cache = DimensionCache::new();
        cache.commit(Dimensions::new(200.0, 100.0));
        cache.commit(Dimensions::new(300.0, 150.0));
        assert!(!cache.matches(Dimensions::new(200.0, 100.0)));
        assert!(cache.matches(Dimensions::new(300.0, 150.0)));
    }
}
