//! Per-frame input queue.
//!
//! The host pushes discrete [`InputEvent`]s as it observes them; the game
//! drains the queue once at the top of each update. Because the core only
//! ever sees this queue, a sequence of events can be replayed in tests
//! without any window.

use std::collections::VecDeque;

use crate::events::input::{InputEvent, Key};

#[derive(Debug, Clone, Default)]
pub struct InputState {
    queue: VecDeque<InputEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn key_down(&mut self, key: Key) {
        self.push(InputEvent::KeyDown(key));
    }

    pub fn key_up(&mut self, key: Key) {
        self.push(InputEvent::KeyUp(key));
    }

    pub fn click(&mut self) {
        self.push(InputEvent::Click);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Take every queued event in arrival order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        self.queue.drain(..).collect()
    }
}
