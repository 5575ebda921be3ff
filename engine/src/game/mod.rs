mod fences;
mod fruit;
mod game_state;
mod grid;
mod session_rng;
mod settings;
mod snake;
mod types;

pub use fences::FenceField;
pub use fruit::{Fruit, FruitKind};
pub use game_state::{GameEvent, GameState};
pub use grid::Grid;
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use snake::{MIN_SEGMENTS, Snake};
pub use types::{Command, Direction, GameOverReason, Point, Screen};
