use serde::{Deserialize, Serialize};
pub use snake_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use snake_common::games::snake::SwipeGestureConfig;

const CONFIG_FILE: &str = "snake_game_config.yaml";

/// The initial snake needs three cells to the left of the centre column.
pub const MIN_GRID_SIZE: u32 = 6;
pub const MAX_GRID_SIZE: u32 = 100;

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(CONFIG_FILE)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    pub swipe: SwipeConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.swipe.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub grid_size: u32,
    /// Fixed seed for fruit placement; a fresh one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 15,
            seed: None,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(format!(
                "grid_size must be between {} and {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE
            ));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SwipeConfig {
    pub min_swipe_distance_dp: f32,
    pub density: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance_dp: SwipeGestureConfig::MIN_SWIPE_DISTANCE_DP,
            density: 1.0,
        }
    }
}

impl Validate for SwipeConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.min_swipe_distance_dp.is_finite() || self.min_swipe_distance_dp <= 0.0 {
            return Err("min_swipe_distance_dp must be greater than 0".to_string());
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err("density must be greater than 0".to_string());
        }
        Ok(())
    }
}
