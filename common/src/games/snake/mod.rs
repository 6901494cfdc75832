mod calculate_spawn_zone;
mod detect_swipe_direction;
mod find_empty_cells;
mod fruit;
mod game_state;
mod snake;
mod spawn_fruit;
mod swipe;
mod types;
mod validate_direction;

pub use calculate_spawn_zone::calculate_spawn_zone;
pub use detect_swipe_direction::{SwipeDirectionDetector, detect_swipe_direction};
pub use find_empty_cells::find_empty_cells;
pub use fruit::Fruit;
pub use game_state::GameState;
pub use snake::Snake;
pub use spawn_fruit::{FruitSpawner, SpawnFruitError};
pub use swipe::{Density, Offset, SwipeGesture, SwipeGestureConfig};
pub use types::{Direction, FieldSize, Position};
pub use validate_direction::validate_direction;
