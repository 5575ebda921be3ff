use eframe::egui;
use engine::game::FruitKind;

pub const FIELD_LIGHT: egui::Color32 = egui::Color32::from_rgb(70, 158, 43);
pub const FIELD_DARK: egui::Color32 = egui::Color32::from_rgb(55, 125, 34);
pub const HUD_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(245, 245, 240);
pub const HUD_TEXT: egui::Color32 = egui::Color32::from_rgb(20, 20, 20);
pub const OVERLAY: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 150);
pub const OVERLAY_HEADING: egui::Color32 = egui::Color32::from_rgb(250, 250, 250);
pub const OVERLAY_ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 205, 90);

pub const SNAKE_HEAD: egui::Color32 = egui::Color32::from_rgb(225, 175, 40);
pub const SNAKE_BODY: egui::Color32 = egui::Color32::from_rgb(245, 205, 80);
pub const SNAKE_TAIL: egui::Color32 = egui::Color32::from_rgb(205, 165, 60);
pub const SNAKE_EYE: egui::Color32 = egui::Color32::from_rgb(35, 30, 20);

pub const FENCE: egui::Color32 = egui::Color32::from_rgb(125, 85, 50);

pub fn fruit_color(kind: FruitKind) -> egui::Color32 {
    match kind {
        FruitKind::Normal => egui::Color32::from_rgb(170, 200, 60),
        FruitKind::Red => egui::Color32::from_rgb(229, 36, 36),
        FruitKind::Blue => egui::Color32::from_rgb(64, 110, 229),
        FruitKind::Orange => egui::Color32::from_rgb(240, 150, 40),
        FruitKind::Purple => egui::Color32::from_rgb(160, 70, 200),
    }
}
