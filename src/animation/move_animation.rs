// src/animation/move_animation.rs
//
// The Move Animator
//
// Slides the tiles of a spread move from their source cell toward each
// destination, one leg at a time. Planning is pure: a MovePlan holds every
// leg's moving tiles and per-frame offsets. Playing a plan erases and
// redraws those tiles on a surface, presenting once per frame.

use log::{debug, info, trace};
use nannou::prelude::*;
use std::ops::Range;

use crate::config::Layout;
use crate::draw::{DrawSurface, ShapeId};
use crate::models::{BoardModel, Direction, Move, Square, Tile};
use crate::views::{BoardStyle, ViewCell};

/// Frames skipped at the start of every leg.
const SKIPPED_FRAMES: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct LegFrame {
    pub k: usize,
    /// Offset of each moving tile, bottom to top.
    pub offsets: Vec<Vec2>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegPlan {
    pub leg: usize,
    pub drop: usize,
    pub source: Square,
    pub destination: Square,
    /// Stack indices (0-based) of the moving tiles in the source cell.
    pub slice: Range<usize>,
    pub tiles: Vec<Tile>,
    pub step: f32,
    /// Canvas displacement per frame before fan-out.
    pub velocity: Vec2,
    pub frames: Vec<LegFrame>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovePlan {
    pub legs: Vec<LegPlan>,
}

impl MovePlan {
    pub fn frame_count(&self) -> usize {
        self.legs.iter().map(|leg| leg.frames.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

/// Stack range moved on a leg: the `drop` lowest of the `remaining` carried
/// tiles, running to the top of the stack once everything left is dropped.
fn leg_slice(stack_len: usize, remaining: usize, drop: usize) -> Range<usize> {
    if remaining > stack_len || drop == 0 || drop > remaining {
        panic!(
            "malformed leg slice: {} carried, {} dropped, stack of {}",
            remaining, drop, stack_len
        );
    }
    let start = stack_len - remaining;
    if remaining == drop {
        start..stack_len
    } else {
        start..start + drop
    }
}

#[derive(Debug, Clone)]
pub struct MoveAnimator {
    layout: Layout,
}

impl MoveAnimator {
    pub fn new(layout: &Layout) -> Self {
        Self {
            layout: layout.clone(),
        }
    }

    /// Per-frame (dx, dy) before the screen mapping, and the step it came from.
    fn leg_motion(&self, direction: Direction, leg: usize, landing_height: usize) -> (f32, f32, f32) {
        let frames = self.layout.frame_count as f32;
        let mut step = self.layout.cell_size / frames * (leg + 1) as f32;
        let (dx, dy) = match direction {
            Direction::Up => {
                step -= self.layout.stack_pitch * landing_height as f32 / frames;
                (step, 0.0)
            }
            Direction::Down => (-step, 0.0),
            Direction::Right => (0.0, -step),
            Direction::Left => (0.0, step),
        };
        (step, dx, dy)
    }

    fn leg_frames(&self, dx: f32, dy: f32, tile_count: usize) -> Vec<LegFrame> {
        let frames = self.layout.frame_count;
        (SKIPPED_FRAMES..frames)
            .map(|k| {
                let kf = k as f32;
                let progress = kf / frames as f32;
                let offsets = (1..=tile_count)
                    .map(|idx| {
                        let fan_out = (idx - 1) as f32 * self.layout.stack_pitch * progress;
                        vec2(-(dy * kf), dx * kf - fan_out)
                    })
                    .collect();
                LegFrame { k, offsets }
            })
            .collect()
    }

    /// Computes every leg of `mv` against the board as it was before the move.
    /// Placements produce an empty plan.
    ///
    /// Panics if a leg would leave the board or the source stack cannot
    /// supply the carried tiles.
    pub fn plan<B: BoardModel>(&self, mv: &Move, old_board: &B) -> MovePlan {
        let direction = match mv.direction {
            Some(direction) => direction,
            None => return MovePlan::default(),
        };
        let size = old_board.size();
        let source = mv.square();
        let stack = old_board.tiles(source);

        let mut remaining = mv.total;
        let mut legs = Vec::new();
        for (leg, drop) in mv.legs().into_iter().enumerate() {
            let slice = leg_slice(stack.len(), remaining, drop);
            let tiles = stack[slice.clone()].to_vec();
            let destination = source.walk(direction, leg + 1, size);
            let landing_height = old_board.tiles(destination).len();
            let (step, dx, dy) = self.leg_motion(direction, leg, landing_height);
            let frames = self.leg_frames(dx, dy, tiles.len());

            debug!(
                "leg {}: {} -> {} tiles {:?} step {:.3} (dx {:.3}, dy {:.3})",
                leg, source, destination, slice, step, dx, dy
            );

            legs.push(LegPlan {
                leg,
                drop,
                source,
                destination,
                slice,
                tiles,
                step,
                velocity: vec2(-dy, dx),
                frames,
            });
            remaining -= drop;
        }
        MovePlan { legs }
    }

    /// Draws every frame of `plan` from `source_cell`, presenting each one.
    /// The resting shapes of each leg's tiles are erased first; the final
    /// frame of a leg stays on the surface. Returns the frames presented.
    pub fn play<S: DrawSurface>(
        &self,
        plan: &MovePlan,
        source_cell: &ViewCell,
        style: &BoardStyle,
        surface: &mut S,
    ) -> usize {
        let mut presented = 0;
        for leg in &plan.legs {
            let mut ids: Vec<ShapeId> = source_cell
                .handles()
                .get(leg.slice.clone())
                .map(|ids| ids.to_vec())
                .unwrap_or_default();

            for frame in &leg.frames {
                surface.delete_all(&ids);
                ids = leg
                    .tiles
                    .iter()
                    .zip(&frame.offsets)
                    .enumerate()
                    .map(|(i, (tile, offset))| {
                        source_cell.draw_tile(surface, tile, i + 1, *offset, style)
                    })
                    .collect();
                surface.present();
                presented += 1;
                trace!("leg {} frame {}", leg.leg, frame.k);
            }
        }
        presented
    }

    /// Plans and plays `mv`, blocking until the last frame is presented.
    pub fn animate<B: BoardModel, S: DrawSurface>(
        &self,
        mv: &Move,
        old_board: &B,
        source_cell: &ViewCell,
        style: &BoardStyle,
        surface: &mut S,
    ) -> usize {
        info!("animating move from {} over {} legs", mv.square(), mv.legs().len());
        let plan = self.plan(mv, old_board);
        self.play(&plan, source_cell, style, surface)
    }
}
