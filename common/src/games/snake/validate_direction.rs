use super::types::Direction;

/// Only a 180-degree turn is refused; continuing straight or turning 90 degrees is allowed.
pub fn validate_direction(current: Direction, requested: Direction) -> bool {
    !current.is_reverse(&requested)
}
