use super::types::{FieldSize, Position};

/// The 3x3 block centred on `tail`, clipped to the field. Holds between one
/// and nine cells, the tail itself included.
pub fn calculate_spawn_zone(tail: Position, width: i32, height: i32) -> Vec<Position> {
    let field = FieldSize::new(width, height);
    let mut zone = Vec::with_capacity(9);
    for dx in -1..=1 {
        for dy in -1..=1 {
            let cell = tail.offset(dx, dy);
            if field.contains(&cell) {
                zone.push(cell);
            }
        }
    }
    zone
}
