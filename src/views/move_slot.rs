// src/views/move_slot.rs
//
// Holds at most one move waiting to be animated. A newer move replaces an
// unconsumed one; rendering takes it out.

#[derive(Debug)]
pub struct MoveSlot<T> {
    slot: Option<T>,
}

impl<T> Default for MoveSlot<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> MoveSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `item`, handing back whatever it displaced.
    pub fn push(&mut self, item: T) -> Option<T> {
        self.slot.replace(item)
    }

    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }

    pub fn peek(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
