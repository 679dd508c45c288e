//! Tracking the framebuffer size and the GL viewport that covers it.

use std::num::NonZeroU32;

use winit::dpi::PhysicalSize;

/// The full-framebuffer viewport, lower-left at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn from_size(size: PhysicalSize<u32>) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
    /// Surface dimensions, if neither is zero. Minimized windows report zero sizes,
    /// which a window surface can't take.
    #[must_use]
    pub fn surface_size(&self) -> Option<(NonZeroU32, NonZeroU32)> {
        Some((NonZeroU32::new(self.width)?, NonZeroU32::new(self.height)?))
    }
    /// `[min, size]` arguments for [`crate::state::State::viewport`].
    #[must_use]
    pub fn as_gl_rect(&self) -> ([u32; 2], [u32; 2]) {
        ([0, 0], [self.width, self.height])
    }
    /// Set the GL viewport to cover the whole framebuffer.
    pub fn apply(&self, gl: &crate::Gl) {
        let (min, size) = self.as_gl_rect();
        gl.state.viewport(min, size);
    }
}

/// Remembers the last applied viewport. Only the size a resize reports matters,
/// so resizing twice to the same size lands in the same state.
#[derive(Debug, Default)]
pub struct ViewportTracker {
    current: Option<Viewport>,
}

impl ViewportTracker {
    /// Record a new framebuffer size. Returns the viewport to apply, or `None` if
    /// it is already the current one.
    #[must_use]
    pub fn resize(&mut self, size: PhysicalSize<u32>) -> Option<Viewport> {
        let viewport = Viewport::from_size(size);
        if self.current == Some(viewport) {
            return None;
        }
        self.current = Some(viewport);
        Some(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_matches_framebuffer_exactly() {
        let viewport = Viewport::from_size(PhysicalSize::new(1024, 768));
        assert_eq!(viewport.as_gl_rect(), ([0, 0], [1024, 768]));
    }

    #[test]
    fn first_resize_is_applied() {
        let mut tracker = ViewportTracker::default();
        assert_eq!(
            tracker.resize(PhysicalSize::new(800, 600)),
            Some(Viewport {
                width: 800,
                height: 600
            })
        );
    }

    #[test]
    fn repeated_size_is_skipped() {
        let mut tracker = ViewportTracker::default();
        assert!(tracker.resize(PhysicalSize::new(640, 480)).is_some());
        assert_eq!(tracker.resize(PhysicalSize::new(640, 480)), None);
    }

    #[test]
    fn latest_resize_wins() {
        let mut tracker = ViewportTracker::default();
        assert!(tracker.resize(PhysicalSize::new(800, 600)).is_some());
        assert_eq!(
            tracker.resize(PhysicalSize::new(300, 200)),
            Some(Viewport {
                width: 300,
                height: 200
            })
        );
        // Back to a previous, but not current, size.
        assert!(tracker.resize(PhysicalSize::new(800, 600)).is_some());
        assert_eq!(tracker.resize(PhysicalSize::new(800, 600)), None);
    }

    #[test]
    fn zero_sizes_have_no_surface_size() {
        assert!(Viewport::from_size(PhysicalSize::new(0, 600))
            .surface_size()
            .is_none());
        assert!(Viewport::from_size(PhysicalSize::new(800, 0))
            .surface_size()
            .is_none());
        let (w, h) = Viewport::from_size(PhysicalSize::new(800, 600))
            .surface_size()
            .unwrap();
        assert_eq!((w.get(), h.get()), (800, 600));
    }
}
