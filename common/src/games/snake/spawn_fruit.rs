use std::error::Error;
use std::fmt;

use crate::games::SessionRng;
use crate::log;
use super::calculate_spawn_zone::calculate_spawn_zone;
use super::find_empty_cells::find_empty_cells;
use super::game_state::GameState;
use super::types::{FieldSize, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnFruitError {
    /// Snake and fruit cover every cell of the field.
    GridExhausted,
}

impl fmt::Display for SpawnFruitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnFruitError::GridExhausted => write!(f, "no empty cells left on the grid"),
        }
    }
}

impl Error for SpawnFruitError {}

/// Places fruit near the snake's tail, falling back to any free cell.
#[derive(Clone, Copy, Debug)]
pub struct FruitSpawner {
    field_size: FieldSize,
}

impl FruitSpawner {
    pub fn new(field_size: FieldSize) -> Self {
        Self { field_size }
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub fn spawn(&self, state: &GameState, rng: &mut SessionRng) -> Result<Position, SpawnFruitError> {
        let tail = state.snake.tail();
        let segments = state.snake_segments();
        let fruit = state.fruit.as_ref();

        let zone = calculate_spawn_zone(tail, self.field_size.width, self.field_size.height);
        let zone_free = find_empty_cells(&zone, &segments, fruit);
        if let Some(position) = rng.choose(&zone_free) {
            return Ok(*position);
        }

        log!(
            "Spawn zone around tail ({}, {}) is full, searching the whole grid",
            tail.x,
            tail.y
        );

        let grid: Vec<Position> = self.field_size.cells().collect();
        let grid_free = find_empty_cells(&grid, &segments, fruit);
        rng.choose(&grid_free)
            .copied()
            .ok_or(SpawnFruitError::GridExhausted)
    }
}
