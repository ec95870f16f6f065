//! Bounded FIFO window of confirmed heights.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A bounded, insertion-ordered window of confirmed raw heights.
///
/// The window is never reordered or filtered by value: pushing past
/// capacity evicts exactly the oldest element.
///
/// # Example
///
/// ```
/// use height_meter::RollingWindow;
///
/// let mut window = RollingWindow::new(3);
/// for h in [1.0, 1.0, 1.0, 0.7] {
///     window.push(h);
/// }
///
/// assert_eq!(window.len(), 3);
/// assert!((window.mean().unwrap() - 0.9).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct RollingWindow {
    /// Maximum number of heights kept.
    capacity: usize,

    /// Heights in arrival order, oldest first.
    heights: VecDeque<f32>,
}

impl RollingWindow {
    /// Creates an empty window with the given capacity.
    ///
    /// A capacity of zero is clamped to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            heights: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    /// Returns the capacity of the window.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of heights in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Returns true if no height has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Returns true if the window is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.heights.len() >= self.capacity
    }

    /// Appends a height, evicting the oldest if at capacity.
    pub fn push(&mut self, height: f32) {
        if self.is_full() {
            self.heights.pop_front();
        }
        self.heights.push_back(height);
    }

    /// Returns the unweighted arithmetic mean of the window.
    ///
    /// Returns `None` if the window is empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Option<f32> {
        if self.heights.is_empty() {
            return None;
        }
        let sum: f32 = self.heights.iter().sum();
        Some(sum / self.heights.len() as f32)
    }

    /// Returns the oldest height.
    #[must_use]
    pub fn oldest(&self) -> Option<f32> {
        self.heights.front().copied()
    }

    /// Returns the most recent height.
    #[must_use]
    pub fn latest(&self) -> Option<f32> {
        self.heights.back().copied()
    }

    /// Returns an iterator over the heights, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.heights.iter().copied()
    }

    /// Computes statistics about the window.
    #[must_use]
    pub fn stats(&self) -> WindowStats {
        let min = self.iter().reduce(f32::min);
        let max = self.iter().reduce(f32::max);
        WindowStats {
            count: self.len(),
            capacity: self.capacity,
            mean: self.mean(),
            spread: min.zip(max).map(|(lo, hi)| hi - lo),
        }
    }
}

/// Statistics about a rolling window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowStats {
    /// Number of heights.
    pub count: usize,

    /// Window capacity.
    pub capacity: usize,

    /// Mean height in meters.
    pub mean: Option<f32>,

    /// Difference between the largest and smallest height in meters.
    pub spread: Option<f32>,
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::similar_names
)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn window_new() {
        let window = RollingWindow::new(5);
        assert_eq!(window.capacity(), 5);
        assert!(window.is_empty());
        assert!(!window.is_full());
        assert!(window.mean().is_none());
    }

    #[test]
    fn window_min_capacity() {
        let window = RollingWindow::new(0);
        assert_eq!(window.capacity(), 1);
    }

    #[test]
    fn window_push() {
        let mut window = RollingWindow::new(10);
        window.push(1.0);
        window.push(2.0);
        window.push(3.0);

        assert_eq!(window.len(), 3);
        assert_relative_eq!(window.mean().unwrap(), 2.0);
    }

    #[test]
    fn window_push_evicts_oldest() {
        let mut window = RollingWindow::new(3);
        window.push(1.0);
        window.push(2.0);
        window.push(3.0);
        assert!(window.is_full());

        window.push(4.0);
        assert_eq!(window.len(), 3);
        assert_eq!(window.oldest(), Some(2.0));
        assert_eq!(window.latest(), Some(4.0));
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn window_capacity_one_tracks_latest() {
        let mut window = RollingWindow::new(0);
        window.push(0.5);
        window.push(0.8);
        assert_eq!(window.len(), 1);
        assert_eq!(window.mean(), Some(0.8));
    }

    #[test]
    fn window_keeps_arrival_order() {
        let mut window = RollingWindow::new(4);
        for h in [0.9, 0.1, 0.5, 0.3] {
            window.push(h);
        }
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![0.9, 0.1, 0.5, 0.3]);
    }

    #[test]
    fn window_stats() {
        let mut window = RollingWindow::new(5);
        window.push(0.88);
        window.push(0.92);
        window.push(0.90);

        let stats = window.stats();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.capacity, 5);
        assert_relative_eq!(stats.mean.unwrap(), 0.9, epsilon = 1e-6);
        assert_relative_eq!(stats.spread.unwrap(), 0.04, epsilon = 1e-6);
    }

    #[test]
    fn window_stats_empty() {
        let window = RollingWindow::new(5);
        let stats = window.stats();
        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_none());
        assert!(stats.spread.is_none());
    }
}
