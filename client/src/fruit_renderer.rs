use snake_common::games::snake::{Fruit, Offset};

/// Fruit circle radius as a fraction of the cell size.
pub const FRUIT_RADIUS_RATIO: f32 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FruitMarker {
    pub center: Offset,
    pub radius: f32,
    pub color: Color,
}

/// Circle to draw for the fruit, centred in its cell. Nothing is drawn for a
/// missing or inactive fruit.
pub fn fruit_marker(fruit: Option<&Fruit>, cell_size_px: f32) -> Option<FruitMarker> {
    let fruit = fruit.filter(|f| f.is_active)?;
    let half = cell_size_px / 2.0;
    Some(FruitMarker {
        center: Offset::new(
            fruit.position.x as f32 * cell_size_px + half,
            fruit.position.y as f32 * cell_size_px + half,
        ),
        radius: cell_size_px * FRUIT_RADIUS_RATIO,
        color: Color::RED,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::games::snake::Position;

    #[test]
    fn test_marker_is_centred_in_cell() {
        let fruit = Fruit::new(Position::new(3, 2));
        let marker = fruit_marker(Some(&fruit), 20.0).unwrap();
        assert_eq!(marker.center, Offset::new(70.0, 50.0));
        assert_eq!(marker.radius, 8.0);
        assert_eq!(marker.color, Color::RED);
    }

    #[test]
    fn test_no_marker_without_fruit() {
        assert!(fruit_marker(None, 20.0).is_none());
    }

    #[test]
    fn test_no_marker_for_inactive_fruit() {
        let fruit = Fruit {
            position: Position::new(0, 0),
            is_active: false,
        };
        assert!(fruit_marker(Some(&fruit), 20.0).is_none());
    }
}
