/// One scroll notification after tracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    /// Signed change from the previous notification; positive when scrolling
    /// down.
    pub delta: f64,
}

/// Remembers the last vertical offset so each notification can be turned
/// into a signed delta.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    last: f64,
}

impl ScrollTracker {
    pub fn new(initial: f64) -> Self {
        Self { last: initial }
    }

    pub fn record(&mut self, offset: f64) -> ScrollSample {
        let delta = offset - self.last;
        self.last = offset;
        ScrollSample { offset, delta }
    }

    pub fn last(&self) -> f64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_signed() {
        let mut t = ScrollTracker::new(0.0);
        assert_eq!(t.record(120.0).delta, 120.0);
        assert_eq!(t.record(90.0).delta, -30.0);
        assert_eq!(t.record(90.0).delta, 0.0);
        assert_eq!(t.last(), 90.0);
    }
}
