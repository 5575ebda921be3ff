use serde::{Deserialize, Serialize};

use crate::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameSettings {
    pub field_width: u32,
    pub field_height: u32,
    pub hud_rows: u32,
    pub initial_move_delay: f32,
    pub min_move_delay: f32,
    pub max_fences: u32,
    pub placement_attempts: u32,
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 5 || self.field_width > 100 {
            return Err("field_width must be between 5 and 100".to_string());
        }
        if self.field_height < 5 || self.field_height > 100 {
            return Err("field_height must be between 5 and 100".to_string());
        }
        if self.hud_rows >= self.field_height {
            return Err("hud_rows must leave at least one playable row".to_string());
        }
        if self.min_move_delay < 1.0 {
            return Err("min_move_delay must be at least 1".to_string());
        }
        if self.initial_move_delay < self.min_move_delay {
            return Err("initial_move_delay must not be below min_move_delay".to_string());
        }
        if self.initial_move_delay > 120.0 {
            return Err("initial_move_delay must not exceed 120".to_string());
        }
        if self.max_fences > 1000 {
            return Err("max_fences must not exceed 1000".to_string());
        }
        if self.placement_attempts < 1 {
            return Err("placement_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_width: 15,
            field_height: 16,
            hud_rows: 1,
            initial_move_delay: 10.0,
            min_move_delay: 1.0,
            max_fences: 100,
            placement_attempts: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_tiny_field() {
        let settings = GameSettings {
            field_width: 3,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_hud_swallowing_field() {
        let settings = GameSettings {
            hud_rows: 16,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_delay_below_floor() {
        let settings = GameSettings {
            initial_move_delay: 0.5,
            min_move_delay: 1.0,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
