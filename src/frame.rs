//! Render loop state.
//!
//! Each frame goes `Idle -> Drawing -> Idle`. Once a close is requested no new frame
//! starts, and the loop is done.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Drawing,
}

#[derive(Debug)]
pub struct FrameLoop {
    phase: Phase,
    close_requested: bool,
    frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            close_requested: false,
            frames: 0,
        }
    }
}

impl FrameLoop {
    /// Enter `Drawing`. Returns `false`, and stays put, if closing or already drawing.
    #[must_use]
    pub fn begin(&mut self) -> bool {
        if self.close_requested || self.phase == Phase::Drawing {
            return false;
        }
        self.phase = Phase::Drawing;
        true
    }
    /// Back to `Idle` after the frame was presented.
    pub fn finish(&mut self) {
        if self.phase == Phase::Drawing {
            self.phase = Phase::Idle;
            self.frames += 1;
        }
    }
    /// The OS asked for the window to close. Takes effect before the next frame;
    /// a frame in progress still finishes.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.close_requested
    }
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Frames presented so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_cycles_through_drawing() {
        let mut frames = FrameLoop::default();
        assert_eq!(frames.phase(), Phase::Idle);
        assert!(frames.begin());
        assert_eq!(frames.phase(), Phase::Drawing);
        frames.finish();
        assert_eq!(frames.phase(), Phase::Idle);
        assert_eq!(frames.frames(), 1);
    }

    #[test]
    fn no_nested_frames() {
        let mut frames = FrameLoop::default();
        assert!(frames.begin());
        assert!(!frames.begin());
        frames.finish();
        assert!(frames.begin());
    }

    #[test]
    fn close_stops_new_frames() {
        let mut frames = FrameLoop::default();
        assert!(frames.begin());
        frames.request_close();
        frames.finish();
        assert!(frames.is_closing());
        assert!(!frames.begin());
        assert_eq!(frames.phase(), Phase::Idle);
        assert_eq!(frames.frames(), 1);
    }

    #[test]
    fn finish_without_begin_is_ignored() {
        let mut frames = FrameLoop::default();
        frames.finish();
        assert_eq!(frames.frames(), 0);
    }
}
