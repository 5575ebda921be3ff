use eframe::egui;

use engine::game::{Command, Direction, GameEvent, GameState, SessionRng};

use crate::audio::AudioPlayer;
use crate::config::ClientConfig;
use crate::game_ui::GameUi;

pub struct SnakemanApp {
    state: GameState,
    rng: SessionRng,
    audio: AudioPlayer,
    game_ui: GameUi,
}

impl SnakemanApp {
    pub fn new(config: ClientConfig, state: GameState, rng: SessionRng) -> Self {
        let mut audio = AudioPlayer::new(&config.audio);
        audio.enter_screen(state.screen);

        Self {
            state,
            rng,
            audio,
            game_ui: GameUi::new(config.pixels_per_cell as f32),
        }
    }

    fn poll_input(&mut self, ctx: &egui::Context) {
        let mut commands = Vec::new();
        let mut close_requested = false;

        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowUp) {
                commands.push(Command::Steer(Direction::Up));
            } else if i.key_pressed(egui::Key::ArrowDown) {
                commands.push(Command::Steer(Direction::Down));
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                commands.push(Command::Steer(Direction::Left));
            } else if i.key_pressed(egui::Key::ArrowRight) {
                commands.push(Command::Steer(Direction::Right));
            }

            if i.key_pressed(egui::Key::Enter) {
                commands.push(Command::Confirm);
            }
            if i.key_pressed(egui::Key::P) {
                commands.push(Command::Pause);
            }
            if i.key_pressed(egui::Key::Escape) {
                close_requested = true;
            }
        });

        for command in commands {
            self.state.apply(command);
        }
        if close_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for SnakemanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen_before = self.state.screen;

        self.poll_input(ctx);

        let events = self.state.tick(&mut self.rng);
        for event in &events {
            if let GameEvent::FruitEaten { kind } = event {
                self.audio.play_eat_cue(kind.is_special());
            }
        }

        if self.state.screen != screen_before {
            self.audio.enter_screen(self.state.screen);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.game_ui.render(ui, &self.state);
            });

        // The simulation is frame-driven; keep the loop running even with no
        // input or animation in flight.
        ctx.request_repaint();
    }
}
