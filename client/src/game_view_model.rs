use snake_common::games::SessionRng;
use snake_common::games::snake::{
    Density, Direction, FieldSize, FruitSpawner, GameState, Position, SpawnFruitError,
    SwipeDirectionDetector, SwipeGesture, validate_direction,
};
use snake_common::{log, log_error};
use tokio::sync::watch;

use crate::config::{Config, MAX_GRID_SIZE, MIN_GRID_SIZE, Validate};

/// Owns the current [`GameState`] and publishes every replacement to subscribers.
///
/// Each accepted input swaps in a new state value; rejected inputs leave the
/// published state untouched and wake no one.
pub struct GameViewModel {
    state_tx: watch::Sender<GameState>,
    spawner: FruitSpawner,
    swipe_detector: SwipeDirectionDetector,
    rng: SessionRng,
}

impl GameViewModel {
    /// Starts a new game on a `grid_size` square field with the initial fruit placed.
    pub fn new(grid_size: i32, density: Density, rng: SessionRng) -> Result<Self, String> {
        Self::start(grid_size, SwipeDirectionDetector::new(density), rng)
    }

    pub fn from_config(config: &Config) -> Result<Self, String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let rng = match config.game.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        let detector = SwipeDirectionDetector::with_min_distance_dp(
            Density::new(config.swipe.density),
            config.swipe.min_swipe_distance_dp,
        );
        Self::start(config.game.grid_size as i32, detector, rng)
    }

    fn start(
        grid_size: i32,
        swipe_detector: SwipeDirectionDetector,
        rng: SessionRng,
    ) -> Result<Self, String> {
        let allowed = MIN_GRID_SIZE as i32..=MAX_GRID_SIZE as i32;
        if !allowed.contains(&grid_size) {
            return Err(format!(
                "grid_size must be between {} and {}, got {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE, grid_size
            ));
        }

        let mut view_model = Self::from_state(
            GameState::initial(grid_size),
            FieldSize::square(grid_size),
            swipe_detector,
            rng,
        );
        if let Ok(position) = view_model.respawn_fruit() {
            log!(
                "Game started on {}x{} grid (seed {}), fruit at ({}, {})",
                grid_size,
                grid_size,
                view_model.rng.seed(),
                position.x,
                position.y
            );
        }
        Ok(view_model)
    }

    /// Hosts an arbitrary state as-is; no fruit is spawned.
    pub fn from_state(
        state: GameState,
        field_size: FieldSize,
        swipe_detector: SwipeDirectionDetector,
        rng: SessionRng,
    ) -> Self {
        let (state_tx, _) = watch::channel(state);
        Self {
            state_tx,
            spawner: FruitSpawner::new(field_size),
            swipe_detector,
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.state_tx.subscribe()
    }

    pub fn field_size(&self) -> FieldSize {
        self.spawner.field_size()
    }

    /// Turns the snake unless `requested` is a reversal. Repeating the current
    /// direction is accepted but publishes nothing.
    pub fn handle_direction_input(&self, requested: Direction) {
        let mut rejected_from = None;
        self.state_tx.send_if_modified(|state| {
            let current = state.snake.direction;
            if !validate_direction(current, requested) {
                rejected_from = Some(current);
                return false;
            }
            if current == requested {
                return false;
            }
            *state = state.with_snake(state.snake.with_direction(requested));
            true
        });

        if let Some(current) = rejected_from {
            log!("Ignored reverse turn {:?} -> {:?}", current, requested);
        }
    }

    /// Resolves a finished swipe and feeds it to [`Self::handle_direction_input`].
    pub fn handle_swipe(&self, gesture: &SwipeGesture) -> Option<Direction> {
        let direction = self.swipe_detector.detect(gesture)?;
        self.handle_direction_input(direction);
        Some(direction)
    }

    /// Places a new fruit. An exhausted grid ends the game.
    pub fn respawn_fruit(&mut self) -> Result<Position, SpawnFruitError> {
        let current = self.state();
        match self.spawner.spawn(&current, &mut self.rng) {
            Ok(position) => {
                self.state_tx.send_replace(current.with_fruit_at(position));
                Ok(position)
            }
            Err(err) => {
                log_error!("Fruit spawn failed: {}; game over with score {}", err, current.score);
                self.state_tx.send_replace(current.finished());
                Err(err)
            }
        }
    }
}
