// src/config/config_load.rs
//
// loading to config.toml

use serde::Deserialize;
use std::fs;

use crate::config::{AnimationConfig, DemoConfig, Layout, LoggingConfig, StyleConfig, WindowConfig};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: Layout,
    pub style: StyleConfig,
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub logging: LoggingConfig,
    pub demo: DemoConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    pub fn parse(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(toml::from_str(content)?)
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            Self::parse(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Self::parse(&content)
    }

    /// Window size, falling back to the board's pixel extent.
    pub fn window_size(&self) -> (u32, u32) {
        let extent = self.layout.board_extent(self.layout.board_size).ceil() as u32;
        let width = if self.window.width == 0 { extent } else { self.window.width };
        let height = if self.window.height == 0 { extent } else { self.window.height };
        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
            [layout]
            board_size = 6
            frame_count = 20

            [animation]
            frame_duration = 0.05

            [logging]
            level = "debug"

            [demo]
            moves = ["a1", "b2"]
        "#;
        let config = Config::parse(content).unwrap();
        assert_eq!(config.layout.board_size, 6);
        assert_eq!(config.layout.frame_count, 20);
        assert_eq!(config.layout.cell_size, 75.0);
        assert_eq!(config.animation.frame_duration, 0.05);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.demo.moves, vec!["a1", "b2"]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.layout.board_size, 5);
        assert!(config.demo.moves.is_empty());
    }

    #[test]
    fn test_window_size_fits_board() {
        let config = Config::default();
        assert_eq!(config.window_size(), (375, 375));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(Config::parse("[layout]\ncell_size = \"wide\"").is_err());
    }
}
