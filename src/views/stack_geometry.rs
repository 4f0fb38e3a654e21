// src/views/stack_geometry.rs
//
// Where a tile sits inside its cell, given its 1-based height in the stack.

use crate::config::Layout;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackOffsets {
    pub half_tile: f32,
    pub half_cell: f32,
    pub pitch_offset: f32, // how far this tile is lifted above the cell's base
    pub shape_bias: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct StackGeometry {
    half_tile: f32,
    half_cell: f32,
    stack_pitch: f32,
    shape_bias: f32,
}

impl StackGeometry {
    pub fn new(layout: &Layout) -> Self {
        Self {
            half_tile: layout.tile_size / 2.0,
            half_cell: layout.cell_size / 2.0,
            stack_pitch: layout.stack_pitch,
            shape_bias: layout.shape_bias,
        }
    }

    pub fn offsets(&self, index: usize) -> StackOffsets {
        StackOffsets {
            half_tile: self.half_tile,
            half_cell: self.half_cell,
            pitch_offset: self.stack_pitch * index as f32,
            shape_bias: self.shape_bias,
        }
    }
}
