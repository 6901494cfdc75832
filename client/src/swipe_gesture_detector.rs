use snake_common::games::snake::{Direction, Offset, SwipeDirectionDetector, SwipeGesture};

/// Accumulates pointer drag deltas into one swipe, resolved when the drag ends.
pub struct SwipeGestureDetector {
    detector: SwipeDirectionDetector,
    accumulated: Offset,
}

impl SwipeGestureDetector {
    pub fn new(detector: SwipeDirectionDetector) -> Self {
        Self {
            detector,
            accumulated: Offset::ZERO,
        }
    }

    pub fn on_drag_start(&mut self) {
        self.accumulated = Offset::ZERO;
    }

    pub fn on_drag(&mut self, delta: Offset) {
        self.accumulated += delta;
    }

    pub fn accumulated(&self) -> Offset {
        self.accumulated
    }

    /// Builds the gesture from the accumulated drag and resets for the next one.
    pub fn on_drag_end(&mut self) -> Option<Direction> {
        let gesture = SwipeGesture::new(Offset::ZERO, self.accumulated);
        self.accumulated = Offset::ZERO;
        self.detector.detect(&gesture)
    }
}
