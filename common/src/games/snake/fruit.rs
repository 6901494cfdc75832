use super::types::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fruit {
    pub position: Position,
    pub is_active: bool,
}

impl Fruit {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            is_active: true,
        }
    }
}
