// src/draw/mod.rs
// The drawing surface abstraction.
//
// Everything the view produces is expressed in canvas space: origin at the
// top-left corner, y growing downward. Backends translate from there.

pub mod display_list;
pub mod nannou_draw;

pub use display_list::{DisplayList, RenderedFrame};
pub use nannou_draw::{draw_frame, CanvasTransform};

use nannou::prelude::*;

/// Handle to a shape living on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rect,
    Polygon,
    Oval,
    Line,
}

#[derive(Debug, Clone)]
pub enum Shape {
    Rect {
        min: Point2,
        max: Point2,
        fill: Rgb<f32>,
        outline: Option<Rgb<f32>>,
    },
    Polygon {
        points: Vec<Point2>,
        fill: Rgb<f32>,
        outline: Option<Rgb<f32>>,
    },
    Oval {
        min: Point2,
        max: Point2,
        fill: Rgb<f32>,
    },
    Line {
        start: Point2,
        end: Point2,
        color: Rgb<f32>,
    },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rect { .. } => ShapeKind::Rect,
            Shape::Polygon { .. } => ShapeKind::Polygon,
            Shape::Oval { .. } => ShapeKind::Oval,
            Shape::Line { .. } => ShapeKind::Line,
        }
    }

    pub fn fill(&self) -> Option<Rgb<f32>> {
        match self {
            Shape::Rect { fill, .. } | Shape::Polygon { fill, .. } | Shape::Oval { fill, .. } => {
                Some(*fill)
            }
            Shape::Line { .. } => None,
        }
    }

    /// Centre of the shape's bounding box.
    pub fn center(&self) -> Point2 {
        match self {
            Shape::Rect { min, max, .. } | Shape::Oval { min, max, .. } => (*min + *max) * 0.5,
            Shape::Polygon { points, .. } => {
                let (lo, hi) = points.iter().fold(
                    (pt2(f32::MAX, f32::MAX), pt2(f32::MIN, f32::MIN)),
                    |(lo, hi), p| (lo.min(*p), hi.max(*p)),
                );
                (lo + hi) * 0.5
            }
            Shape::Line { start, end, .. } => (*start + *end) * 0.5,
        }
    }
}

/// A retained-mode 2D surface: shapes are created, addressed by handle,
/// deleted, and presented.
pub trait DrawSurface {
    fn create(&mut self, shape: Shape) -> ShapeId;

    /// Removes a shape. Unknown handles are ignored.
    fn delete(&mut self, id: ShapeId);

    /// Removes every shape.
    fn clear(&mut self);

    /// Synchronously presents the current contents as one frame.
    fn present(&mut self);

    fn create_rectangle(
        &mut self,
        min: Point2,
        max: Point2,
        fill: Rgb<f32>,
        outline: Option<Rgb<f32>>,
    ) -> ShapeId {
        self.create(Shape::Rect {
            min,
            max,
            fill,
            outline,
        })
    }

    fn create_polygon(
        &mut self,
        points: Vec<Point2>,
        fill: Rgb<f32>,
        outline: Option<Rgb<f32>>,
    ) -> ShapeId {
        self.create(Shape::Polygon {
            points,
            fill,
            outline,
        })
    }

    fn create_oval(&mut self, min: Point2, max: Point2, fill: Rgb<f32>) -> ShapeId {
        self.create(Shape::Oval { min, max, fill })
    }

    fn create_line(&mut self, start: Point2, end: Point2, color: Rgb<f32>) -> ShapeId {
        self.create(Shape::Line { start, end, color })
    }

    fn delete_all(&mut self, ids: &[ShapeId]) {
        for id in ids {
            self.delete(*id);
        }
    }
}
