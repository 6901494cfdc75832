use std::collections::HashSet;

use super::fruit::Fruit;
use super::types::Position;

/// Candidates not covered by the snake or the fruit, in their original order.
pub fn find_empty_cells(
    candidates: &[Position],
    snake_segments: &[Position],
    fruit: Option<&Fruit>,
) -> Vec<Position> {
    let occupied: HashSet<Position> = snake_segments
        .iter()
        .copied()
        .chain(fruit.map(|f| f.position))
        .collect();

    candidates
        .iter()
        .copied()
        .filter(|cell| !occupied.contains(cell))
        .collect()
}
