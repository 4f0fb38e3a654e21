// src/draw/display_list.rs
//
// In-memory DrawSurface. Keeps live shapes in creation order and records a
// snapshot every time it is presented; the app plays the snapshots back and
// tests inspect them.

use std::collections::{BTreeMap, VecDeque};

use crate::draw::{DrawSurface, Shape, ShapeId, ShapeKind};

#[derive(Debug, Clone, Default)]
pub struct RenderedFrame {
    pub shapes: Vec<Shape>,
}

impl RenderedFrame {
    pub fn count(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.kind() == kind).count()
    }
}

#[derive(Debug, Default)]
pub struct DisplayList {
    next_id: u64,
    shapes: BTreeMap<ShapeId, Shape>,
    frames: VecDeque<RenderedFrame>,
    presented: usize,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn count(&self, kind: ShapeKind) -> usize {
        self.shapes().filter(|s| s.kind() == kind).count()
    }

    /// The live shapes as a frame, without presenting.
    pub fn snapshot(&self) -> RenderedFrame {
        RenderedFrame {
            shapes: self.shapes.values().cloned().collect(),
        }
    }

    /// Total number of presents since creation.
    pub fn frames_presented(&self) -> usize {
        self.presented
    }

    /// Hands over the recorded frames, oldest first.
    pub fn take_frames(&mut self) -> Vec<RenderedFrame> {
        self.frames.drain(..).collect()
    }
}

impl DrawSurface for DisplayList {
    fn create(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.insert(id, shape);
        id
    }

    fn delete(&mut self, id: ShapeId) {
        self.shapes.remove(&id);
    }

    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn present(&mut self) {
        let frame = self.snapshot();
        self.frames.push_back(frame);
        self.presented += 1;
    }
}
