// src/animation/playback.rs
//
// Timed playback of presented frames.
//
// The board view presents frames synchronously into a DisplayList; the app
// drains them into a FramePlayback and shows one per frame_duration, so an
// animation reaches the screen at a steady pace. The last frame shown stays
// current once the queue runs dry.

use std::collections::VecDeque;

use crate::draw::RenderedFrame;

#[derive(Debug, Default)]
pub struct FramePlayback {
    queue: VecDeque<RenderedFrame>,
    current: Option<RenderedFrame>,
    frame_timer: f32,
    frame_duration: f32,
}

impl FramePlayback {
    pub fn new(frame_duration: f32) -> Self {
        Self {
            queue: VecDeque::new(),
            current: None,
            frame_timer: 0.0,
            frame_duration,
        }
    }

    pub fn enqueue<I: IntoIterator<Item = RenderedFrame>>(&mut self, frames: I) {
        self.queue.extend(frames);
        if self.current.is_none() {
            self.advance();
        }
    }

    /// Accumulates `dt`; true once a frame's worth of time has passed.
    pub fn update(&mut self, dt: f32) -> bool {
        self.frame_timer += dt;
        if self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            true
        } else {
            false
        }
    }

    /// Moves to the next queued frame, if any.
    pub fn advance(&mut self) -> Option<&RenderedFrame> {
        if let Some(frame) = self.queue.pop_front() {
            self.current = Some(frame);
        }
        self.current.as_ref()
    }

    /// Shows the next frame once its time has come.
    pub fn tick(&mut self, dt: f32) {
        if self.queue.is_empty() {
            self.frame_timer = 0.0;
            return;
        }
        if self.update(dt) {
            self.advance();
        }
    }

    pub fn current(&self) -> Option<&RenderedFrame> {
        self.current.as_ref()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_complete(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Shape;
    use nannou::prelude::{pt2, rgb};

    fn frame(lines: usize) -> RenderedFrame {
        RenderedFrame {
            shapes: (0..lines)
                .map(|i| Shape::Line {
                    start: pt2(0.0, i as f32),
                    end: pt2(1.0, i as f32),
                    color: rgb(0.0, 0.0, 0.0),
                })
                .collect(),
        }
    }

    #[test]
    fn test_first_frame_shows_immediately() {
        let mut playback = FramePlayback::new(0.1);
        playback.enqueue(vec![frame(1), frame(2)]);
        assert_eq!(playback.current().map(|f| f.shapes.len()), Some(1));
        assert_eq!(playback.pending(), 1);
    }

    #[test]
    fn test_frames_advance_on_duration() {
        let mut playback = FramePlayback::new(0.1);
        playback.enqueue(vec![frame(1), frame(2), frame(3)]);

        playback.tick(0.05);
        assert_eq!(playback.current().map(|f| f.shapes.len()), Some(1));
        playback.tick(0.06);
        assert_eq!(playback.current().map(|f| f.shapes.len()), Some(2));
        playback.tick(0.1);
        assert_eq!(playback.current().map(|f| f.shapes.len()), Some(3));
        assert!(playback.is_complete());
    }

    #[test]
    fn test_last_frame_stays_current() {
        let mut playback = FramePlayback::new(0.1);
        playback.enqueue(vec![frame(4)]);
        playback.tick(1.0);
        playback.tick(1.0);
        assert_eq!(playback.current().map(|f| f.shapes.len()), Some(4));
    }
}
