use snake_client::launcher;
use snake_common::log;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let view_model = launcher::launch(Some("Client".to_string()))?;

    let state = view_model.state();
    log!(
        "Snake of length {} heading {:?}, fruit at {:?}",
        state.score,
        state.snake.direction,
        state.fruit.map(|f| f.position)
    );

    Ok(())
}
