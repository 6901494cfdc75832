use super::swipe::{Density, SwipeGesture, SwipeGestureConfig};
use super::types::Direction;

/// Resolves a swipe to a cardinal direction along its dominant axis.
///
/// Returns `None` when the swipe is shorter than `min_distance_px`. A
/// diagonal with equal horizontal and vertical magnitude resolves vertically.
pub fn detect_swipe_direction(gesture: &SwipeGesture, min_distance_px: f32) -> Option<Direction> {
    if gesture.distance() < min_distance_px {
        return None;
    }

    let dx = gesture.delta_x();
    let dy = gesture.delta_y();

    let direction = if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(direction)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeDirectionDetector {
    min_distance_px: f32,
}

impl SwipeDirectionDetector {
    pub fn new(density: Density) -> Self {
        Self::with_min_distance_dp(density, SwipeGestureConfig::MIN_SWIPE_DISTANCE_DP)
    }

    pub fn with_min_distance_dp(density: Density, min_distance_dp: f32) -> Self {
        Self {
            min_distance_px: density.to_px(min_distance_dp),
        }
    }

    pub fn min_distance_px(&self) -> f32 {
        self.min_distance_px
    }

    pub fn detect(&self, gesture: &SwipeGesture) -> Option<Direction> {
        detect_swipe_direction(gesture, self.min_distance_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::Offset;

    fn swipe(dx: f32, dy: f32) -> SwipeGesture {
        SwipeGesture::new(Offset::new(100.0, 100.0), Offset::new(100.0 + dx, 100.0 + dy))
    }

    fn detector() -> SwipeDirectionDetector {
        SwipeDirectionDetector::new(Density::new(1.0))
    }

    #[test]
    fn test_horizontal_dominant_resolves_right() {
        assert_eq!(detector().detect(&swipe(200.0, 80.0)), Some(Direction::Right));
    }

    #[test]
    fn test_horizontal_dominant_resolves_left() {
        assert_eq!(detector().detect(&swipe(-200.0, 80.0)), Some(Direction::Left));
    }

    #[test]
    fn test_vertical_dominant_resolves_down() {
        assert_eq!(detector().detect(&swipe(60.0, 200.0)), Some(Direction::Down));
    }

    #[test]
    fn test_vertical_dominant_resolves_up() {
        assert_eq!(detector().detect(&swipe(60.0, -200.0)), Some(Direction::Up));
    }

    #[test]
    fn test_equal_magnitudes_default_to_vertical() {
        assert_eq!(detector().detect(&swipe(150.0, 150.0)), Some(Direction::Down));
        assert_eq!(detector().detect(&swipe(-150.0, -150.0)), Some(Direction::Up));
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        let detector = SwipeDirectionDetector::with_min_distance_dp(Density::new(2.0), 50.0);
        assert_eq!(detector.min_distance_px(), 100.0);
        assert_eq!(detector.detect(&swipe(50.0, 0.0)), None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(detect_swipe_direction(&swipe(50.0, 0.0), 50.0), Some(Direction::Right));
        assert_eq!(detect_swipe_direction(&swipe(49.9, 0.0), 50.0), None);
    }

    #[test]
    fn test_density_scales_threshold() {
        let detector = SwipeDirectionDetector::new(Density::new(3.0));
        assert_eq!(detector.detect(&swipe(120.0, 0.0)), None);
        assert_eq!(detector.detect(&swipe(160.0, 0.0)), Some(Direction::Right));
    }
}
