//! Horizontal scroll offset state.
//!
//! One reused offset variable, advanced once per animation frame. The text
//! starts at the viewport's right edge, moves left by a fixed step, and wraps
//! back to the right edge once its own right edge clears the viewport.

/// Scroll position of the ticker line across a fixed-width viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    offset: f64,
    viewport_width: f64,
    text_width: f64,
    step: f64,
}

impl ScrollState {
    pub fn new(viewport_width: f64, text_width: f64, step: f64) -> Self {
        Self { offset: viewport_width, viewport_width, text_width, step }
    }

    /// Layout has produced a usable viewport width.
    ///
    /// A zero width means layout has not completed; setup is deferred until
    /// [`set_layout`](Self::set_layout) supplies real measurements.
    pub fn is_ready(&self) -> bool {
        self.viewport_width > 0.0
    }

    /// Update measurements after layout; restarts the line at the right edge.
    pub fn set_layout(&mut self, viewport_width: f64, text_width: f64) {
        self.viewport_width = viewport_width;
        self.text_width = text_width;
        self.offset = viewport_width;
    }

    /// Adjust the viewport width mid-scroll, keeping the current offset.
    ///
    /// Only the wrap target changes; the line keeps moving from where it is.
    pub fn resize_viewport(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width;
    }

    /// Advance one frame: move left by the step, wrapping to the right edge
    /// once `offset + text_width <= 0`.
    pub fn advance(&mut self) {
        if !self.is_ready() {
            return;
        }
        self.offset -= self.step;
        if self.offset + self.text_width <= 0.0 {
            self.offset = self.viewport_width;
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn text_width(&self) -> f64 {
        self.text_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_right_edge() {
        let state = ScrollState::new(80.0, 20.0, 2.0);
        assert_eq!(state.offset(), 80.0);
    }

    #[test]
    fn test_advance_decreases_by_step() {
        let mut state = ScrollState::new(80.0, 20.0, 2.0);
        state.advance();
        assert_eq!(state.offset(), 78.0);
        state.advance();
        assert_eq!(state.offset(), 76.0);
    }

    #[test]
    fn test_wraps_exactly_to_viewport_width() {
        let mut state = ScrollState::new(10.0, 4.0, 2.0);
        // Offset walks 10, 8, 6, ... ; the frame that reaches -4 satisfies
        // offset + text_width <= 0 and resets to the right edge.
        for _ in 0..7 {
            state.advance();
        }
        assert_eq!(state.offset(), 10.0);
    }

    #[test]
    fn test_offset_stays_bounded_over_many_cycles() {
        let mut state = ScrollState::new(30.0, 12.0, 2.5);
        for _ in 0..10_000 {
            state.advance();
            assert!(state.offset() <= 30.0);
            assert!(state.offset() > -(12.0 + 2.5));
        }
    }

    #[test]
    fn test_strictly_decreases_between_wraps() {
        let mut state = ScrollState::new(30.0, 12.0, 2.5);
        let mut prev = state.offset();
        for _ in 0..1_000 {
            state.advance();
            let now = state.offset();
            assert!(now < prev || now == 30.0);
            prev = now;
        }
    }

    #[test]
    fn test_resize_viewport_keeps_offset_and_moves_wrap_target() {
        let mut state = ScrollState::new(10.0, 4.0, 2.0);
        state.advance();
        assert_eq!(state.offset(), 8.0);

        state.resize_viewport(30.0);
        assert_eq!(state.offset(), 8.0);
        assert_eq!(state.viewport_width(), 30.0);

        // Offset walks 6, 4, 2, 0, -2, -4; the last frame wraps to the
        // widened right edge, not the old one.
        for _ in 0..6 {
            state.advance();
        }
        assert_eq!(state.offset(), 30.0);
    }

    #[test]
    fn test_zero_viewport_defers() {
        let mut state = ScrollState::new(0.0, 20.0, 2.0);
        assert!(!state.is_ready());
        state.advance();
        assert_eq!(state.offset(), 0.0);

        state.set_layout(40.0, 20.0);
        assert!(state.is_ready());
        assert_eq!(state.offset(), 40.0);
    }
}
