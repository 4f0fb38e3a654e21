// src/views/view_board.rs
//
// The ViewBoard is the board renderer.
//
// It owns one ViewCell per square, the board being shown, the cells that
// changed with the last applied move and the move still waiting to be
// animated. `apply_move` only records; `render` animates the pending
// spread (if any) and then redraws the whole board.

use log::{debug, info};
use nannou::prelude::*;

use crate::animation::MoveAnimator;
use crate::config::Layout;
use crate::draw::DrawSurface;
use crate::models::{BoardModel, Move, NotationError, Player, Square};
use crate::views::{BoardStyle, MoveSlot, ViewCell};

#[derive(Debug, Clone)]
pub struct PendingMove<B> {
    pub notation: String,
    pub decoded: Move,
    pub old_board: B,
}

pub struct ViewBoard<B: BoardModel> {
    layout: Layout,
    style: BoardStyle,
    board: B,
    cells: Vec<ViewCell>, // indexed by Square::index
    changed: Vec<bool>,
    pending: MoveSlot<PendingMove<B>>,
    animator: MoveAnimator,
}

impl<B: BoardModel> ViewBoard<B> {
    pub fn new(board: B, layout: &Layout, style: BoardStyle) -> Self {
        let size = board.size();
        let cells = (0..size)
            .flat_map(|i| (0..size).map(move |j| Square::new(i, j)))
            .map(|square| ViewCell::new(square, layout))
            .collect();

        Self {
            layout: layout.clone(),
            style,
            board,
            cells,
            changed: vec![false; size * size],
            pending: MoveSlot::new(),
            animator: MoveAnimator::new(layout),
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn cell(&self, square: Square) -> &ViewCell {
        &self.cells[square.index(self.size())]
    }

    pub fn is_changed(&self, square: Square) -> bool {
        self.changed[square.index(self.size())]
    }

    pub fn pending(&self) -> Option<&PendingMove<B>> {
        self.pending.peek()
    }

    /// Canvas extent of the whole board.
    pub fn extent(&self) -> f32 {
        self.layout.board_extent(self.size())
    }

    /// Replaces the shown board without animating, e.g. when restarting.
    pub fn reset(&mut self, board: B) {
        self.board = board;
        self.changed = vec![false; self.board.size() * self.board.size()];
        self.pending.take();
    }

    /// Records `notation` played by `player` on `old_board`: the resulting
    /// board becomes the shown board, every square whose stack differs is
    /// flagged, and the move waits for the next `render`.
    pub fn apply_move(
        &mut self,
        notation: &str,
        player: Player,
        old_board: &B,
    ) -> Result<(), NotationError> {
        let decoded = Move::decode(notation)?;
        let mut new_board = old_board.clone();
        new_board.force_apply(notation, player)?;

        let size = new_board.size();
        let mut flagged = 0;
        for i in 0..size {
            for j in 0..size {
                let square = Square::new(i, j);
                if new_board.tiles(square) != old_board.tiles(square) {
                    self.changed[square.index(size)] = true;
                    flagged += 1;
                }
            }
        }
        debug!("{} changed {} cells", notation, flagged);

        let displaced = self.pending.push(PendingMove {
            notation: notation.to_string(),
            decoded,
            old_board: old_board.clone(),
        });
        if let Some(displaced) = displaced {
            debug!("{} replaced unrendered move {}", notation, displaced.notation);
        }
        self.board = new_board;
        Ok(())
    }

    /// Animates the pending spread, if there is one, then redraws every
    /// cell and the guide lines. Blocks until the animation has been
    /// presented in full. Returns the number of animation frames.
    pub fn render<S: DrawSurface>(&mut self, surface: &mut S) -> usize {
        let mut animated = 0;
        if let Some(pending) = self.pending.take() {
            if pending.decoded.is_spread() {
                let source = pending.decoded.square();
                let source_cell = &self.cells[source.index(self.size())];
                info!("animating {}", pending.notation);
                animated = self.animator.animate(
                    &pending.decoded,
                    &pending.old_board,
                    source_cell,
                    &self.style,
                    surface,
                );
            }
        }

        surface.clear();
        for (cell, active) in self.cells.iter_mut().zip(&self.changed) {
            let tiles = self.board.tiles(cell.square);
            cell.render(surface, tiles, *active, &self.style);
        }
        self.draw_guides(surface);
        self.changed.iter_mut().for_each(|flag| *flag = false);
        surface.present();
        animated
    }

    fn draw_guides<S: DrawSurface>(&self, surface: &mut S) {
        let inset = self.layout.border_inset;
        let extent = self.extent();
        let origin = pt2(inset, inset);
        surface.create_line(origin, pt2(extent, inset), self.style.guide_line);
        surface.create_line(origin, pt2(inset, extent), self.style.guide_line);
    }
}
