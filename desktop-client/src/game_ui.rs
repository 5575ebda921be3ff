use eframe::egui;
use engine::game::{GameState, Grid, Point, Screen};

use crate::colors;

pub struct GameUi {
    cell: f32,
}

impl GameUi {
    pub fn new(pixels_per_cell: f32) -> Self {
        Self {
            cell: pixels_per_cell,
        }
    }

    pub fn render(&self, ui: &mut egui::Ui, state: &GameState) {
        let grid = state.grid();
        let canvas = egui::Vec2::new(grid.cols as f32 * self.cell, grid.rows as f32 * self.cell);
        let (response, painter) = ui.allocate_painter(canvas, egui::Sense::hover());
        let origin = response.rect.min;

        self.paint_field(&painter, origin, grid);
        self.paint_hud(&painter, origin, grid, state);
        self.paint_fences(&painter, origin, state);
        self.paint_fruit(&painter, origin, state);
        self.paint_snake(&painter, origin, state);

        match state.screen {
            Screen::Gameplay => {}
            Screen::Title => self.paint_title_overlay(&painter, response.rect),
            Screen::Pause => self.paint_pause_overlay(&painter, response.rect),
            Screen::Ending => self.paint_ending_overlay(&painter, response.rect, state),
        }
    }

    fn cell_rect(&self, origin: egui::Pos2, point: Point) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                origin.x + point.x as f32 * self.cell,
                origin.y + point.y as f32 * self.cell,
            ),
            egui::vec2(self.cell, self.cell),
        )
    }

    fn paint_field(&self, painter: &egui::Painter, origin: egui::Pos2, grid: &Grid) {
        for y in grid.hud_rows..grid.rows {
            for x in 0..grid.cols {
                let color = if (x + y) % 2 == 0 {
                    colors::FIELD_LIGHT
                } else {
                    colors::FIELD_DARK
                };
                painter.rect_filled(self.cell_rect(origin, Point::new(x, y)), 0.0, color);
            }
        }
    }

    fn paint_hud(&self, painter: &egui::Painter, origin: egui::Pos2, grid: &Grid, state: &GameState) {
        let band = egui::Rect::from_min_size(
            origin,
            egui::vec2(grid.cols as f32 * self.cell, grid.hud_rows as f32 * self.cell),
        );
        painter.rect_filled(band, 0.0, colors::HUD_BACKGROUND);

        let font = egui::FontId::proportional(self.cell * 0.4);
        let y = band.center().y;
        painter.text(
            egui::pos2(band.min.x + self.cell * 0.25, y),
            egui::Align2::LEFT_CENTER,
            format!("Score : {}", state.score),
            font.clone(),
            colors::HUD_TEXT,
        );
        painter.text(
            egui::pos2(band.center().x, y),
            egui::Align2::CENTER_CENTER,
            format!("Last Score : {}", state.last_score),
            font.clone(),
            colors::HUD_TEXT,
        );
        painter.text(
            egui::pos2(band.max.x - self.cell * 0.25, y),
            egui::Align2::RIGHT_CENTER,
            format!("High Score : {}", state.high_score),
            font,
            colors::HUD_TEXT,
        );
    }

    fn paint_fences(&self, painter: &egui::Painter, origin: egui::Pos2, state: &GameState) {
        for fence in state.fences.positions() {
            let rect = self.cell_rect(origin, *fence).shrink(self.cell * 0.08);
            painter.rect_filled(rect, 3.0, colors::FENCE);
            // Two lighter rails suggest the post-and-rail look.
            let rail = egui::Rect::from_min_size(
                egui::pos2(rect.min.x, rect.min.y + rect.height() * 0.25),
                egui::vec2(rect.width(), rect.height() * 0.12),
            );
            painter.rect_filled(rail, 0.0, colors::FENCE.gamma_multiply(1.4));
            let rail = rail.translate(egui::vec2(0.0, rect.height() * 0.4));
            painter.rect_filled(rail, 0.0, colors::FENCE.gamma_multiply(1.4));
        }
    }

    fn paint_fruit(&self, painter: &egui::Painter, origin: egui::Pos2, state: &GameState) {
        let Some(fruit) = state.fruit else {
            return;
        };
        let rect = self.cell_rect(origin, fruit.position);
        painter.circle_filled(
            rect.center(),
            self.cell * 0.35,
            colors::fruit_color(fruit.kind),
        );
        // Stem.
        painter.rect_filled(
            egui::Rect::from_center_size(
                egui::pos2(rect.center().x, rect.center().y - self.cell * 0.38),
                egui::vec2(self.cell * 0.06, self.cell * 0.14),
            ),
            0.0,
            colors::FENCE,
        );
    }

    fn paint_snake(&self, painter: &egui::Painter, origin: egui::Pos2, state: &GameState) {
        let last = state.snake.len() - 1;
        for (index, segment) in state.snake.segments().enumerate() {
            let rect = self.cell_rect(origin, segment).shrink(self.cell * 0.06);
            let color = if index == 0 {
                colors::SNAKE_HEAD
            } else if index == last {
                colors::SNAKE_TAIL
            } else {
                colors::SNAKE_BODY
            };
            painter.rect_filled(rect, self.cell * 0.2, color);

            if index == 0 {
                self.paint_eyes(painter, rect, state);
            }
        }
    }

    fn paint_eyes(&self, painter: &egui::Painter, head: egui::Rect, state: &GameState) {
        let (dx, dy) = state.snake.direction().delta();
        let forward = egui::vec2(dx as f32, dy as f32) * self.cell * 0.18;
        let sideways = egui::vec2(-dy as f32, dx as f32) * self.cell * 0.16;
        let center = head.center() + forward;
        painter.circle_filled(center + sideways, self.cell * 0.07, colors::SNAKE_EYE);
        painter.circle_filled(center - sideways, self.cell * 0.07, colors::SNAKE_EYE);
    }

    fn paint_title_overlay(&self, painter: &egui::Painter, rect: egui::Rect) {
        painter.rect_filled(rect, 0.0, colors::OVERLAY);
        self.overlay_text(
            painter,
            rect,
            0.22,
            "SNAKEMAN",
            self.cell * 1.1,
            colors::OVERLAY_HEADING,
        );
        self.overlay_text(
            painter,
            rect,
            0.52,
            "Press ENTER",
            self.cell * 0.8,
            colors::OVERLAY_ACCENT,
        );
        self.overlay_text(
            painter,
            rect,
            0.62,
            "Pause = P",
            self.cell * 0.45,
            colors::OVERLAY_ACCENT,
        );
        self.overlay_text(
            painter,
            rect,
            0.7,
            "Press ESC to quit",
            self.cell * 0.45,
            colors::OVERLAY_ACCENT,
        );
    }

    fn paint_pause_overlay(&self, painter: &egui::Painter, rect: egui::Rect) {
        painter.rect_filled(rect, 0.0, colors::OVERLAY);
        self.overlay_text(
            painter,
            rect,
            0.52,
            "Press ENTER to continue",
            self.cell * 0.7,
            colors::OVERLAY_ACCENT,
        );
        self.overlay_text(
            painter,
            rect,
            0.64,
            "Press ESC to quit",
            self.cell * 0.45,
            colors::OVERLAY_ACCENT,
        );
    }

    fn paint_ending_overlay(&self, painter: &egui::Painter, rect: egui::Rect, state: &GameState) {
        painter.rect_filled(rect, 0.0, colors::OVERLAY);
        self.overlay_text(
            painter,
            rect,
            0.22,
            "Sorry you lost",
            self.cell * 1.0,
            colors::OVERLAY_HEADING,
        );
        self.overlay_text(
            painter,
            rect,
            0.38,
            format!("Your score was {}", state.last_score),
            self.cell * 0.6,
            colors::OVERLAY_HEADING,
        );
        self.overlay_text(
            painter,
            rect,
            0.46,
            format!("High Score : {}", state.high_score),
            self.cell * 0.6,
            colors::OVERLAY_HEADING,
        );
        self.overlay_text(
            painter,
            rect,
            0.58,
            "Press ENTER to retry",
            self.cell * 0.7,
            colors::OVERLAY_ACCENT,
        );
        self.overlay_text(
            painter,
            rect,
            0.68,
            "Press ESC to quit",
            self.cell * 0.45,
            colors::OVERLAY_ACCENT,
        );
    }

    fn overlay_text(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        relative_y: f32,
        text: impl ToString,
        size: f32,
        color: egui::Color32,
    ) {
        painter.text(
            egui::pos2(rect.center().x, rect.min.y + rect.height() * relative_y),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(size),
            color,
        );
    }
}
