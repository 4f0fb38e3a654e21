// src/views/style.rs
// Resolved colors for drawing a board

use nannou::prelude::*;

use crate::config::config_types::{to_rgb, StyleConfig};
use crate::models::Player;

#[derive(Debug, Clone)]
pub struct BoardStyle {
    pub active_cell: Rgb<f32>,
    pub inactive_cell: Rgb<f32>,
    pub cell_outline: Rgb<f32>,
    pub white_tile: Rgb<f32>,
    pub black_tile: Rgb<f32>,
    pub standing_outline: Rgb<f32>,
    pub guide_line: Rgb<f32>,
}

impl BoardStyle {
    pub fn tile_color(&self, player: Player) -> Rgb<f32> {
        match player {
            Player::White => self.white_tile,
            Player::Black => self.black_tile,
        }
    }

    pub fn cell_fill(&self, active: bool) -> Rgb<f32> {
        if active {
            self.active_cell
        } else {
            self.inactive_cell
        }
    }
}

impl From<&StyleConfig> for BoardStyle {
    fn from(config: &StyleConfig) -> Self {
        Self {
            active_cell: to_rgb(config.active_cell),
            inactive_cell: to_rgb(config.inactive_cell),
            cell_outline: to_rgb(config.cell_outline),
            white_tile: to_rgb(config.white_tile),
            black_tile: to_rgb(config.black_tile),
            standing_outline: to_rgb(config.standing_outline),
            guide_line: to_rgb(config.guide_line),
        }
    }
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self::from(&StyleConfig::default())
    }
}
