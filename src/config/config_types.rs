// src/config/config_types.rs
//
// Config types for the app

use nannou::prelude::*;
use serde::Deserialize;

/************************* Board Geometry ********************/

/// Fixed pixel geometry shared by the stack geometry, the cell renderer
/// and the animation engine. Built once and passed around by reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub board_size: usize,
    pub tile_size: f32,
    pub cell_size: f32,
    pub frame_count: usize,
    pub stack_pitch: f32, // vertical lift per stacked tile
    pub shape_bias: f32,  // constant nudge applied to every tile
    pub anchor_inset: f32,
    pub border_inset: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            board_size: 5,
            tile_size: 40.0,
            cell_size: 75.0,
            frame_count: 30,
            stack_pitch: 3.0,
            shape_bias: 5.0,
            anchor_inset: 2.0,
            border_inset: 3.0,
        }
    }
}

impl Layout {
    /// Canvas extent of a board with `size` cells per side.
    pub fn board_extent(&self, size: usize) -> f32 {
        size as f32 * self.cell_size
    }
}

/************************* Style ********************/

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub active_cell: [f32; 3],
    pub inactive_cell: [f32; 3],
    pub cell_outline: [f32; 3],
    pub white_tile: [f32; 3],
    pub black_tile: [f32; 3],
    pub standing_outline: [f32; 3],
    pub guide_line: [f32; 3],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            active_cell: [0.0, 0.5, 0.0],
            inactive_cell: [1.0, 1.0, 1.0],
            cell_outline: [0.0, 0.0, 0.0],
            white_tile: [0.93, 0.91, 0.85],
            black_tile: [0.15, 0.15, 0.18],
            standing_outline: [0.0, 0.0, 0.0],
            guide_line: [0.0, 0.0, 0.0],
        }
    }
}

pub fn to_rgb(c: [f32; 3]) -> Rgb<f32> {
    rgb(c[0], c[1], c[2])
}

/************************* App ********************/

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32, // 0 = fit the board
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub frame_duration: f32, // seconds each presented frame stays on screen
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_duration: 1.0 / 60.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub moves: Vec<String>,
}
