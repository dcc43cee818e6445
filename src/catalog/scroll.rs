//! Infinite-scroll proximity trigger.

use crate::catalog::list::PagedList;

/// Default fraction of the content that must be scrolled past before the
/// next page is requested.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 0.8;

/// Scroll geometry of the list container, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Offset of the viewport top from the content top
    pub scroll_top: f64,
    /// Visible height
    pub viewport_height: f64,
    /// Full content height
    pub content_height: f64,
}

impl Viewport {
    /// Fraction of the content above the viewport bottom, clamped to
    /// `0.0..=1.0`. Content that fits entirely counts as fully scrolled.
    pub fn scrolled_fraction(&self) -> f64 {
        if self.content_height <= self.viewport_height || self.content_height <= 0.0 {
            return 1.0;
        }
        ((self.scroll_top + self.viewport_height) / self.content_height).clamp(0.0, 1.0)
    }
}

/// Decides when viewport proximity should request the next page.
///
/// Idempotence under rapid repeated scroll events comes from the list's
/// in-flight gate, not from any timer.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTrigger {
    threshold: f64,
}

impl ScrollTrigger {
    /// Create a trigger with the given proximity threshold in `(0, 1]`.
    /// Out-of-range values fall back to the default.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold > 0.0 && threshold <= 1.0 {
            threshold
        } else {
            DEFAULT_SCROLL_THRESHOLD
        };
        Self { threshold }
    }

    /// Whether an append fetch should be requested right now.
    pub fn should_load<T>(&self, viewport: Viewport, list: &PagedList<T>) -> bool {
        viewport.scrolled_fraction() >= self.threshold && !list.loading() && list.has_more()
    }
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}
