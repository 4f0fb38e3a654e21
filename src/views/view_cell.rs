// src/views/view_cell.rs
//
// The ViewCell draws one grid cell: its background and its tile stack.
//
// It owns the handles of the tile shapes it last drew so they can be
// erased by whoever needs to move them (the move animator). Its pixel
// anchor is fixed at construction.

use nannou::prelude::*;

use crate::config::Layout;
use crate::draw::{DrawSurface, Shape, ShapeId};
use crate::models::{Square, Stone, Tile};
use crate::views::{BoardStyle, StackGeometry};

#[derive(Debug, Clone)]
pub struct ViewCell {
    pub square: Square,
    anchor: Point2,
    cell_size: f32,
    geometry: StackGeometry,
    handles: Vec<ShapeId>,
}

impl ViewCell {
    pub fn new(square: Square, layout: &Layout) -> Self {
        let anchor = pt2(
            square.i as f32 * layout.cell_size + layout.anchor_inset,
            square.j as f32 * layout.cell_size + layout.anchor_inset,
        );
        Self {
            square,
            anchor,
            cell_size: layout.cell_size,
            geometry: StackGeometry::new(layout),
            handles: Vec::new(),
        }
    }

    /// Top-left corner of the cell on the canvas.
    pub fn anchor(&self) -> Point2 {
        self.anchor
    }

    /// Handles of the tile shapes from the last `render`, bottom to top.
    pub fn handles(&self) -> &[ShapeId] {
        &self.handles
    }

    /// Centre a tile at stack height `index` occupies, shifted by `offset`.
    pub fn find_center(&self, index: usize, offset: Vec2) -> Point2 {
        let o = self.geometry.offsets(index);
        pt2(
            offset.x + self.anchor.x + o.half_cell,
            offset.y + self.anchor.y + o.half_cell - o.pitch_offset + o.shape_bias,
        )
    }

    /// The shape for `tile` drawn at stack height `index`, shifted by `offset`.
    pub fn tile_shape(&self, tile: &Tile, index: usize, offset: Vec2, style: &BoardStyle) -> Shape {
        let o = self.geometry.offsets(index);
        let (n, s) = (o.half_tile, o.half_cell);
        let lift = o.shape_bias - o.pitch_offset;

        let x1 = offset.x + self.anchor.x + s - n;
        let y1 = offset.y + self.anchor.y + s - n + lift;
        let x2 = offset.x + self.anchor.x + s + n;
        let y2 = offset.y + self.anchor.y + s + n + lift;

        let fill = style.tile_color(tile.color);
        match tile.stone {
            Stone::Flat => Shape::Rect {
                min: pt2(x1, y1),
                max: pt2(x2, y2),
                fill,
                outline: Some(style.cell_outline),
            },
            Stone::Standing => Shape::Polygon {
                points: vec![
                    pt2(x1 + n * 1.5, y1),
                    pt2(x2, y1 + n * 0.5),
                    pt2(x1 + n * 0.5, y2),
                    pt2(x1, y1 + n * 1.5),
                ],
                fill,
                outline: Some(style.standing_outline),
            },
            Stone::Cap => {
                let center = self.find_center(index, offset);
                let r = s / 2.0;
                Shape::Oval {
                    min: center - vec2(r, r),
                    max: center + vec2(r, r),
                    fill,
                }
            }
        }
    }

    pub fn draw_tile<S: DrawSurface>(
        &self,
        surface: &mut S,
        tile: &Tile,
        index: usize,
        offset: Vec2,
        style: &BoardStyle,
    ) -> ShapeId {
        surface.create(self.tile_shape(tile, index, offset, style))
    }

    /// Draws `tiles` bottom to top at heights 1.. and returns their handles.
    pub fn draw_stack<S: DrawSurface>(
        &self,
        surface: &mut S,
        tiles: &[Tile],
        offset: Vec2,
        style: &BoardStyle,
    ) -> Vec<ShapeId> {
        tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| self.draw_tile(surface, tile, i + 1, offset, style))
            .collect()
    }

    /// Draws the background and the resting stack, replacing the tracked
    /// handles.
    pub fn render<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        tiles: &[Tile],
        active: bool,
        style: &BoardStyle,
    ) {
        surface.create_rectangle(
            self.anchor,
            self.anchor + vec2(self.cell_size, self.cell_size),
            style.cell_fill(active),
            Some(style.cell_outline),
        );
        self.handles = self.draw_stack(surface, tiles, Vec2::ZERO, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DisplayList, ShapeKind};
    use crate::models::Player;

    fn cell(i: usize, j: usize) -> ViewCell {
        ViewCell::new(Square::new(i, j), &Layout::default())
    }

    mod anchor_tests {
        use super::*;

        #[test]
        fn test_anchor_from_coordinates() {
            for i in 0..5 {
                for j in 0..5 {
                    let c = cell(i, j);
                    let expected = pt2(i as f32 * 75.0 + 2.0, j as f32 * 75.0 + 2.0);
                    assert_eq!(c.anchor(), expected);
                    assert_eq!(c.anchor(), expected);
                }
            }
        }

        #[test]
        fn test_anchor_survives_rendering() {
            let mut c = cell(3, 1);
            let before = c.anchor();
            let mut surface = DisplayList::new();
            c.render(&mut surface, &[Tile::flat(Player::White)], true, &BoardStyle::default());
            assert_eq!(c.anchor(), before);
        }
    }

    mod shape_tests {
        use super::*;

        #[test]
        fn test_flat_tile_rect() {
            let c = cell(0, 0);
            let shape = c.tile_shape(&Tile::flat(Player::White), 1, Vec2::ZERO, &BoardStyle::default());
            match shape {
                Shape::Rect { min, max, .. } => {
                    // anchor 2, half cell 37.5, half tile 20, lift 5 - 3
                    assert_eq!(min, pt2(19.5, 21.5));
                    assert_eq!(max, pt2(59.5, 61.5));
                }
                other => panic!("expected rect, got {:?}", other),
            }
        }

        #[test]
        fn test_standing_tile_quad() {
            let c = cell(0, 0);
            let tile = Tile::new(Stone::Standing, Player::Black);
            match c.tile_shape(&tile, 1, Vec2::ZERO, &BoardStyle::default()) {
                Shape::Polygon { points, outline, .. } => {
                    assert_eq!(points.len(), 4);
                    assert_eq!(points[0], pt2(49.5, 21.5));
                    assert_eq!(points[1], pt2(59.5, 31.5));
                    assert_eq!(points[2], pt2(29.5, 61.5));
                    assert_eq!(points[3], pt2(19.5, 51.5));
                    assert!(outline.is_some());
                }
                other => panic!("expected polygon, got {:?}", other),
            }
        }

        #[test]
        fn test_cap_circle_centered_on_stack() {
            let c = cell(1, 0);
            let tile = Tile::new(Stone::Cap, Player::White);
            let shape = c.tile_shape(&tile, 2, Vec2::ZERO, &BoardStyle::default());
            assert_eq!(shape.kind(), ShapeKind::Oval);
            assert_eq!(shape.center(), c.find_center(2, Vec2::ZERO));
            match shape {
                Shape::Oval { min, max, .. } => assert_eq!(max.x - min.x, 37.5),
                _ => unreachable!(),
            }
        }

        #[test]
        fn test_offset_shifts_every_coordinate() {
            let c = cell(2, 2);
            let tile = Tile::new(Stone::Standing, Player::White);
            let style = BoardStyle::default();
            let offset = vec2(7.0, -4.0);
            let (rest, moved) = match (
                c.tile_shape(&tile, 3, Vec2::ZERO, &style),
                c.tile_shape(&tile, 3, offset, &style),
            ) {
                (Shape::Polygon { points: a, .. }, Shape::Polygon { points: b, .. }) => (a, b),
                _ => panic!("expected polygons"),
            };
            for (a, b) in rest.iter().zip(moved.iter()) {
                assert_eq!(*b - *a, offset);
            }
        }

        #[test]
        fn test_higher_tiles_drawn_higher() {
            let c = cell(0, 0);
            assert!(c.find_center(2, Vec2::ZERO).y < c.find_center(1, Vec2::ZERO).y);
            assert_eq!(
                c.find_center(1, Vec2::ZERO).y - c.find_center(2, Vec2::ZERO).y,
                3.0
            );
        }
    }

    #[test]
    fn test_render_replaces_handles() {
        let mut c = cell(0, 0);
        let mut surface = DisplayList::new();
        let style = BoardStyle::default();
        let tiles = [
            Tile::flat(Player::White),
            Tile::new(Stone::Standing, Player::Black),
            Tile::new(Stone::Cap, Player::White),
        ];

        c.render(&mut surface, &tiles, false, &style);
        assert_eq!(c.handles().len(), 3);
        assert_eq!(surface.count(ShapeKind::Rect), 2);
        assert_eq!(surface.count(ShapeKind::Polygon), 1);
        assert_eq!(surface.count(ShapeKind::Oval), 1);

        let first = c.handles().to_vec();
        c.render(&mut surface, &tiles[..1], false, &style);
        assert_eq!(c.handles().len(), 1);
        assert!(!first.contains(&c.handles()[0]));
    }
}
