use super::fruit::Fruit;
use super::snake::Snake;
use super::types::Position;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub fruit: Option<Fruit>,
    /// Total snake length, head included.
    pub score: u32,
    pub is_game_over: bool,
}

impl GameState {
    pub fn new(snake: Snake, fruit: Option<Fruit>) -> Self {
        let score = snake.length() as u32;
        Self {
            snake,
            fruit,
            score,
            is_game_over: false,
        }
    }

    pub fn initial(grid_size: i32) -> Self {
        Self::new(Snake::initial(grid_size), None)
    }

    pub fn snake_segments(&self) -> Vec<Position> {
        self.snake.segments().collect()
    }

    pub fn with_fruit_at(&self, position: Position) -> Self {
        Self {
            fruit: Some(Fruit::new(position)),
            ..self.clone()
        }
    }

    pub fn with_snake(&self, snake: Snake) -> Self {
        Self {
            snake,
            ..self.clone()
        }
    }

    pub fn finished(&self) -> Self {
        Self {
            fruit: None,
            is_game_over: true,
            ..self.clone()
        }
    }
}
