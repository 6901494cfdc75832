use snake_common::config::{ConfigContentProvider, ConfigSerializer};
use snake_common::{log, logger};

use crate::config::{Config, ConfigManager, get_config_manager};
use crate::game_view_model::GameViewModel;

/// Initialises logging, loads `snake_game_config.yaml` (defaults when the
/// file is missing) and starts a game from it.
pub fn launch(log_prefix: Option<String>) -> Result<GameViewModel, String> {
    launch_with(log_prefix, &get_config_manager())
}

pub fn launch_with<TConfigContentProvider, TConfigSerializer>(
    log_prefix: Option<String>,
    config_manager: &ConfigManager<TConfigContentProvider, Config, TConfigSerializer>,
) -> Result<GameViewModel, String>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfigSerializer: ConfigSerializer<Config>,
{
    logger::init_logger(log_prefix);

    let config = config_manager.get_config()?;
    log!(
        "Loaded config: grid {}x{}, min swipe {}dp at density {}",
        config.game.grid_size,
        config.game.grid_size,
        config.swipe.min_swipe_distance_dp,
        config.swipe.density
    );

    GameViewModel::from_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::config::{MemoryContentConfigProvider, YamlConfigSerializer};
    use snake_common::games::snake::Direction;

    fn manager(content: Option<&str>) -> ConfigManager<MemoryContentConfigProvider, Config> {
        ConfigManager::new(
            MemoryContentConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_launch_initializes_logger_and_starts_game() {
        let yaml = "game:\n  grid_size: 9\n  seed: 3\nswipe:\n  min_swipe_distance_dp: 40.0\n  density: 2.0\n";
        let view_model = launch_with(Some("Client".to_string()), &manager(Some(yaml))).unwrap();

        assert!(logger::is_initialized());
        assert_eq!(view_model.field_size().width, 9);
        assert!(view_model.state().fruit.is_some());

        view_model.handle_direction_input(Direction::Left);
        assert_eq!(view_model.state().snake.direction, Direction::Right);
        assert!(log!("reverse turn was rejected"));
    }

    #[test]
    fn test_launch_with_missing_config_uses_defaults() {
        let view_model = launch_with(None, &manager(None)).unwrap();
        assert_eq!(view_model.field_size().width, 15);
    }

    #[test]
    fn test_launch_rejects_invalid_stored_config() {
        let yaml = "game:\n  grid_size: 4\nswipe:\n  min_swipe_distance_dp: 50.0\n  density: 1.0\n";
        let err = launch_with(None, &manager(Some(yaml))).err().unwrap();
        assert!(err.starts_with("Config validation error"));
    }
}
