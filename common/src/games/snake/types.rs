#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn reverse(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_reverse(&self, other: &Direction) -> bool {
        self.reverse() == *other
    }

    pub fn is_perpendicular(&self, other: &Direction) -> bool {
        self != other && !self.is_reverse(other)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: i32,
    pub height: i32,
}

impl FieldSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn square(size: i32) -> Self {
        Self::new(size, size)
    }

    pub fn contains(&self, position: &Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    /// Every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_pairs() {
        assert_eq!(Direction::Up.reverse(), Direction::Down);
        assert_eq!(Direction::Down.reverse(), Direction::Up);
        assert_eq!(Direction::Left.reverse(), Direction::Right);
        assert_eq!(Direction::Right.reverse(), Direction::Left);
    }

    #[test]
    fn test_double_reverse_is_identity() {
        for d in Direction::ALL {
            assert_eq!(d.reverse().reverse(), d);
        }
    }

    #[test]
    fn test_exactly_one_relation_holds() {
        for d in Direction::ALL {
            for r in Direction::ALL {
                let relations = [d == r, d.is_reverse(&r), d.is_perpendicular(&r)];
                assert_eq!(
                    relations.iter().filter(|&&held| held).count(),
                    1,
                    "{:?} vs {:?}",
                    d,
                    r
                );
            }
        }
    }

    #[test]
    fn test_perpendicular_pairs() {
        assert!(Direction::Up.is_perpendicular(&Direction::Left));
        assert!(Direction::Up.is_perpendicular(&Direction::Right));
        assert!(Direction::Left.is_perpendicular(&Direction::Down));
        assert!(!Direction::Left.is_perpendicular(&Direction::Right));
        assert!(!Direction::Down.is_perpendicular(&Direction::Down));
    }

    #[test]
    fn test_field_contains_bounds() {
        let field = FieldSize::new(4, 3);
        assert!(field.contains(&Position::new(0, 0)));
        assert!(field.contains(&Position::new(3, 2)));
        assert!(!field.contains(&Position::new(4, 0)));
        assert!(!field.contains(&Position::new(0, 3)));
        assert!(!field.contains(&Position::new(-1, 1)));
    }

    #[test]
    fn test_field_cells_covers_grid() {
        let field = FieldSize::new(4, 3);
        let cells: Vec<Position> = field.cells().collect();
        assert_eq!(cells.len(), 12);
        assert!(cells.iter().all(|c| field.contains(c)));
    }
}
