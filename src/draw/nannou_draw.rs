// src/draw/nannou_draw.rs
// Issues nannou draw calls for recorded shapes.

use nannou::prelude::*;

use crate::draw::{RenderedFrame, Shape};

const OUTLINE_WEIGHT: f32 = 1.0;

/// Maps canvas space (top-left origin, y down) to nannou's centred, y-up
/// world space.
#[derive(Debug, Clone, Copy)]
pub struct CanvasTransform {
    pub width: f32,
    pub height: f32,
}

impl CanvasTransform {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn to_world(&self, point: Point2) -> Point2 {
        pt2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    fn box_of(&self, min: Point2, max: Point2) -> (Point2, f32, f32) {
        let center = self.to_world((min + max) * 0.5);
        (center, (max.x - min.x).abs(), (max.y - min.y).abs())
    }
}

pub fn draw_shape(draw: &Draw, shape: &Shape, transform: &CanvasTransform) {
    match shape {
        Shape::Rect {
            min,
            max,
            fill,
            outline,
        } => {
            let (center, w, h) = transform.box_of(*min, *max);
            let rect = draw.rect().xy(center).w_h(w, h).color(*fill);
            if let Some(outline) = outline {
                rect.stroke(*outline).stroke_weight(OUTLINE_WEIGHT);
            }
        }
        Shape::Polygon {
            points,
            fill,
            outline,
        } => {
            let world: Vec<Point2> = points.iter().map(|p| transform.to_world(*p)).collect();
            match outline {
                Some(outline) => {
                    draw.polygon()
                        .color(*fill)
                        .stroke(*outline)
                        .stroke_weight(OUTLINE_WEIGHT)
                        .points(world);
                }
                None => {
                    draw.polygon().color(*fill).points(world);
                }
            }
        }
        Shape::Oval { min, max, fill } => {
            let (center, w, h) = transform.box_of(*min, *max);
            draw.ellipse().xy(center).w_h(w, h).color(*fill);
        }
        Shape::Line { start, end, color } => {
            draw.line()
                .start(transform.to_world(*start))
                .end(transform.to_world(*end))
                .stroke_weight(OUTLINE_WEIGHT)
                .color(*color)
                .caps_round();
        }
    }
}

pub fn draw_frame(draw: &Draw, frame: &RenderedFrame, transform: &CanvasTransform) {
    for shape in &frame.shapes {
        draw_shape(draw, shape, transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_to_world() {
        let t = CanvasTransform::new(300.0, 200.0);
        assert_eq!(t.to_world(pt2(0.0, 0.0)), pt2(-150.0, 100.0));
        assert_eq!(t.to_world(pt2(150.0, 100.0)), pt2(0.0, 0.0));
        assert_eq!(t.to_world(pt2(300.0, 200.0)), pt2(150.0, -100.0));
    }

    #[test]
    fn test_box_of_flips_y() {
        let t = CanvasTransform::new(100.0, 100.0);
        let (center, w, h) = t.box_of(pt2(0.0, 0.0), pt2(20.0, 10.0));
        assert_eq!(center, pt2(-40.0, 45.0));
        assert_eq!((w, h), (20.0, 10.0));
    }
}
