pub mod config;
pub mod fruit_renderer;
pub mod game_view_model;
pub mod launcher;
pub mod swipe_gesture_detector;

pub use game_view_model::GameViewModel;
pub use swipe_gesture_detector::SwipeGestureDetector;
