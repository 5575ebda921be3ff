use engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use engine::game::GameSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "snakeman_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AudioSettings {
    pub enabled: bool,
    pub volume: f32,
}

impl Validate for AudioSettings {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err("volume must be between 0.0 and 1.0".to_string());
        }
        Ok(())
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.8,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub game: GameSettings,
    pub audio: AudioSettings,
    pub pixels_per_cell: u32,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.audio.validate()?;
        if self.pixels_per_cell < 8 || self.pixels_per_cell > 128 {
            return Err("pixels_per_cell must be between 8 and 128".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            audio: AudioSettings::default(),
            pixels_per_cell: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_snakeman_client_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_missing_file_returns_default() {
        let manager: ConfigManager<FileContentConfigProvider, ClientConfig> =
            ConfigManager::from_yaml_file(&get_temp_file_path());
        let config = manager.get_config().unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = get_temp_file_path();
        let manager: ConfigManager<FileContentConfigProvider, ClientConfig> =
            ConfigManager::from_yaml_file(&path);

        let mut config = ClientConfig::default();
        config.pixels_per_cell = 32;
        config.audio.volume = 0.5;
        config.game.field_width = 20;

        manager.set_config(&config).unwrap();

        let reloaded_manager: ConfigManager<FileContentConfigProvider, ClientConfig> =
            ConfigManager::from_yaml_file(&path);
        let reloaded = reloaded_manager.get_config().unwrap();
        assert_eq!(reloaded, config);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_volume_is_rejected() {
        let manager: ConfigManager<FileContentConfigProvider, ClientConfig> =
            ConfigManager::from_yaml_file(&get_temp_file_path());

        let mut config = ClientConfig::default();
        config.audio.volume = 1.5;

        assert!(manager.set_config(&config).is_err());
    }
}
