use super::types::{Direction, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    pub head: Position,
    /// Segments behind the head, ordered head-to-tail.
    pub body: Vec<Position>,
    pub direction: Direction,
}

impl Snake {
    pub fn new(head: Position, body: Vec<Position>, direction: Direction) -> Self {
        Self {
            head,
            body,
            direction,
        }
    }

    /// Centred head with three segments trailing to the left, heading right.
    pub fn initial(grid_size: i32) -> Self {
        let center = Position::new(grid_size / 2, grid_size / 2);
        Self {
            head: center,
            body: vec![center.offset(-1, 0), center.offset(-2, 0), center.offset(-3, 0)],
            direction: Direction::Right,
        }
    }

    pub fn tail(&self) -> Position {
        self.body.last().copied().unwrap_or(self.head)
    }

    pub fn length(&self) -> usize {
        self.body.len() + 1
    }

    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub fn occupies(&self, position: &Position) -> bool {
        self.head == *position || self.body.contains(position)
    }

    pub fn with_direction(&self, direction: Direction) -> Self {
        Self {
            direction,
            ..self.clone()
        }
    }
}
