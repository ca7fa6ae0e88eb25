//! One-shot scroll reveal

use std::collections::BTreeSet;

/// Class names that mark an element for reveal
pub const REVEAL_CLASSES: &[&str] = &["reveal-up", "reveal-left", "reveal-right"];

/// Class applied once an element has been revealed
pub const REVEALED_CLASS: &str = "revealed";

/// Observation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction needed to count as intersecting
    pub threshold: f64,
    /// Pixels trimmed off the bottom of the viewport (root margin
    /// `0px 0px -50px 0px`)
    pub bottom_margin: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
        }
    }
}

impl RevealOptions {
    /// Fraction of an element visible inside the margin-adjusted viewport.
    /// `top` is relative to the top of the viewport.
    pub fn visible_ratio(&self, top: f64, height: f64, viewport_height: f64) -> f64 {
        if height <= 0.0 {
            return 0.0;
        }
        let root_bottom = viewport_height - self.bottom_margin;
        let visible = (top + height).min(root_bottom) - top.max(0.0);
        (visible / height).clamp(0.0, 1.0)
    }

    pub fn is_intersecting(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// Observer over the reveal-tagged elements of a page, identified by their
/// index in document order.
///
/// Revealing is monotonic: an element is revealed at most once and is no
/// longer observed afterwards.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    options: RevealOptions,
    observed: BTreeSet<usize>,
    revealed: BTreeSet<usize>,
}

impl RevealObserver {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            observed: BTreeSet::new(),
            revealed: BTreeSet::new(),
        }
    }

    pub fn options(&self) -> RevealOptions {
        self.options
    }

    /// Start observing an element. Elements already revealed stay
    /// unobserved.
    pub fn observe(&mut self, index: usize) {
        if !self.revealed.contains(&index) {
            self.observed.insert(index);
        }
    }

    pub fn is_observed(&self, index: usize) -> bool {
        self.observed.contains(&index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Deliver an intersection report. Returns `true` only when this report
    /// revealed the element.
    pub fn report(&mut self, index: usize, ratio: f64) -> bool {
        if !self.observed.contains(&index) || !self.options.is_intersecting(ratio) {
            return false;
        }
        self.observed.remove(&index);
        self.revealed.insert(index)
    }

    /// Deliver a report computed from element geometry.
    pub fn report_geometry(&mut self, index: usize, top: f64, height: f64, viewport_height: f64) -> bool {
        let ratio = self.options.visible_ratio(top, height, viewport_height);
        self.report(index, ratio)
    }
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self::new(RevealOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_and_unobserves() {
        let mut r = RevealObserver::default();
        r.observe(3);
        assert!(r.report(3, 0.5));
        assert!(!r.is_observed(3));
        assert!(!r.report(3, 1.0));
        r.observe(3);
        assert!(!r.is_observed(3));
        assert_eq!(r.revealed_count(), 1);
    }

    #[test]
    fn below_threshold_keeps_observing() {
        let mut r = RevealObserver::default();
        r.observe(0);
        assert!(!r.report(0, 0.05));
        assert!(r.is_observed(0));
        assert!(!r.is_revealed(0));
    }

    #[test]
    fn unobserved_elements_are_ignored() {
        let mut r = RevealObserver::default();
        assert!(!r.report(7, 1.0));
        assert!(!r.is_revealed(7));
    }

    #[test]
    fn bottom_margin_shrinks_viewport() {
        let o = RevealOptions::default();
        // 100px element starting 30px above the trimmed bottom edge
        assert!((o.visible_ratio(920.0, 100.0, 1000.0) - 0.3).abs() < 1e-9);
        assert_eq!(o.visible_ratio(960.0, 100.0, 1000.0), 0.0);
        assert_eq!(o.visible_ratio(100.0, 100.0, 1000.0), 1.0);

        let mut r = RevealObserver::default();
        r.observe(0);
        assert!(!r.report_geometry(0, 955.0, 100.0, 1000.0));
        assert!(r.report_geometry(0, 800.0, 100.0, 1000.0));
    }
}
