use crate::log;

use super::fences::FenceField;
use super::fruit::{Fruit, FruitKind};
use super::grid::Grid;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{Command, Direction, GameOverReason, Point, Screen};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    FruitEaten { kind: FruitKind },
    FencePlaced { position: Point },
    GameOver { reason: GameOverReason },
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub fruit: Option<Fruit>,
    pub fences: FenceField,
    pub score: u32,
    pub high_score: u32,
    pub last_score: u32,
    pub screen: Screen,
    pub move_delay: f32,
    frame_counter: u64,
    grid: Grid,
    settings: GameSettings,
}

impl GameState {
    pub fn new(settings: GameSettings) -> Self {
        let grid = Grid::new(
            settings.field_width as i32,
            settings.field_height as i32,
            settings.hud_rows as i32,
        );
        let snake = Snake::new(Self::start_position(&grid), Direction::Right);

        Self {
            snake,
            fruit: None,
            fences: FenceField::new(settings.max_fences as usize),
            score: 0,
            high_score: 0,
            last_score: 0,
            screen: Screen::Title,
            move_delay: settings.initial_move_delay,
            frame_counter: 0,
            grid,
            settings,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn apply(&mut self, command: Command) {
        match (self.screen, command) {
            (Screen::Title, Command::Confirm) => {
                self.screen = Screen::Gameplay;
                log!("Game started");
            }
            (Screen::Gameplay, Command::Steer(direction)) => {
                self.snake.steer(direction);
            }
            (Screen::Gameplay, Command::Pause) => {
                self.screen = Screen::Pause;
            }
            (Screen::Pause, Command::Confirm) => {
                self.screen = Screen::Gameplay;
            }
            (Screen::Ending, Command::Confirm) => {
                self.reset();
            }
            _ => {}
        }
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.screen != Screen::Gameplay {
            return events;
        }

        self.frame_counter += 1;
        if self.frame_counter % (self.move_delay as u64).max(1) == 0 {
            self.snake.advance();
        }

        self.spawn_fruit(rng);
        self.eat_fruit(rng, &mut events);
        self.check_fatal_collisions(&mut events);

        events
    }

    pub fn reset(&mut self) {
        self.snake = Snake::new(Self::start_position(&self.grid), Direction::Right);
        self.fruit = None;
        self.fences.clear();
        self.score = 0;
        self.move_delay = self.settings.initial_move_delay;
        self.frame_counter = 0;
        self.screen = Screen::Title;
        log!("Game reset");
    }

    fn start_position(grid: &Grid) -> Point {
        Point::new(
            (grid.cols / 3).max(2),
            grid.hud_rows + (grid.rows - grid.hud_rows) / 2,
        )
    }

    fn spawn_fruit(&mut self, rng: &mut SessionRng) {
        if self.fruit.is_some() {
            return;
        }

        let Some(position) = self.find_free_cell(rng) else {
            log!("No free cell for a fruit, retrying next frame");
            return;
        };
        let kind = FruitKind::roll(rng);
        log!("Fruit {:?} spawned at ({}, {})", kind, position.x, position.y);
        self.fruit = Some(Fruit { position, kind });
    }

    fn eat_fruit(&mut self, rng: &mut SessionRng, events: &mut Vec<GameEvent>) {
        let Some(fruit) = self.fruit else {
            return;
        };
        if self.snake.head() != fruit.position {
            return;
        }

        self.fruit = None;
        // Base growth applies for every kind, before the kind effect.
        self.snake.grow(1);

        match fruit.kind {
            FruitKind::Normal => {
                self.score += 1;
                self.speed_up(0.2);
            }
            FruitKind::Red => {
                self.score += 1;
                self.speed_up(1.4);
            }
            FruitKind::Blue => {
                self.score += 1;
                self.move_delay += 1.4;
            }
            FruitKind::Orange => {
                self.score += 3;
                self.snake.grow(3);
            }
            FruitKind::Purple => {
                self.score = self.score.saturating_sub(3);
                self.snake.shrink(3);
            }
        }

        log!(
            "Ate {:?} fruit at ({}, {}). Score: {}",
            fruit.kind,
            fruit.position.x,
            fruit.position.y,
            self.score
        );
        events.push(GameEvent::FruitEaten { kind: fruit.kind });

        self.place_fence(rng, events);
    }

    fn speed_up(&mut self, amount: f32) {
        self.move_delay = (self.move_delay - amount).max(self.settings.min_move_delay);
    }

    fn place_fence(&mut self, rng: &mut SessionRng, events: &mut Vec<GameEvent>) {
        if self.fences.is_full() {
            return;
        }

        let Some(position) = self.find_free_cell(rng) else {
            log!("No free cell for a fence, skipping placement");
            return;
        };
        self.fences.try_append(position);
        log!(
            "Fence {} placed at ({}, {})",
            self.fences.len(),
            position.x,
            position.y
        );
        events.push(GameEvent::FencePlaced { position });
    }

    fn find_free_cell(&self, rng: &mut SessionRng) -> Option<Point> {
        for _ in 0..self.settings.placement_attempts {
            let cell = self.grid.random_cell(rng);
            if self.snake.occupies(cell) || self.fences.contains(cell) {
                continue;
            }
            return Some(cell);
        }
        None
    }

    fn check_fatal_collisions(&mut self, events: &mut Vec<GameEvent>) {
        let head = self.snake.head();

        let reason = if self.snake.hits_own_body() {
            Some(GameOverReason::SelfCollision)
        } else if !self.grid.contains(head) {
            Some(GameOverReason::WallCollision)
        } else if self.fences.contains(head) {
            Some(GameOverReason::FenceCollision)
        } else {
            None
        };

        if let Some(reason) = reason {
            self.end_game(reason, events);
        }
    }

    fn end_game(&mut self, reason: GameOverReason, events: &mut Vec<GameEvent>) {
        self.last_score = self.score;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.screen = Screen::Ending;
        log!("Game over: {:?}. Score: {}", reason, self.score);
        events.push(GameEvent::GameOver { reason });
    }
}
