//! Held-key tracking for terminal environments.
//!
//! The game wants "is left/right held right now", but most terminals only
//! report key presses (plus auto-repeat presses). A key that has not been
//! refreshed within the release timeout is treated as released. When the
//! terminal reports real release events the timeout can be disabled.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::{key_direction, Direction};
use crate::types::InputIntent;

// Long enough to bridge the gap between terminal auto-repeat events, short
// enough that a single tap does not turn into a long slide.
const DEFAULT_KEY_RELEASE_TIMEOUT: Duration = Duration::from_millis(180);

/// Tracks which movement keys are held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    left: Option<Instant>,
    right: Option<Instant>,
    key_release_timeout: Option<Duration>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            left: None,
            right: None,
            key_release_timeout: Some(DEFAULT_KEY_RELEASE_TIMEOUT),
        }
    }

    /// `None` disables auto-release (for terminals that report key releases).
    pub fn with_key_release_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.key_release_timeout = timeout;
        self
    }

    pub fn key_release_timeout(&self) -> Option<Duration> {
        self.key_release_timeout
    }

    /// Feed a raw key event. Returns `true` if it was a movement key.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        let now = Instant::now();
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press_at(key.code, now),
            KeyEventKind::Release => self.handle_key_release(key.code),
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> bool {
        self.handle_key_press_at(code, Instant::now())
    }

    pub fn handle_key_press_at(&mut self, code: KeyCode, now: Instant) -> bool {
        match key_direction(code) {
            Some(Direction::Left) => {
                self.left = Some(now);
                true
            }
            Some(Direction::Right) => {
                self.right = Some(now);
                true
            }
            None => false,
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) -> bool {
        match key_direction(code) {
            Some(Direction::Left) => {
                self.left = None;
                true
            }
            Some(Direction::Right) => {
                self.right = None;
                true
            }
            None => false,
        }
    }

    /// Intent for the next step, releasing stale keys first.
    pub fn intent(&mut self) -> InputIntent {
        self.intent_at(Instant::now())
    }

    pub fn intent_at(&mut self, now: Instant) -> InputIntent {
        if let Some(timeout) = self.key_release_timeout {
            let stale = |t: &Instant| now.saturating_duration_since(*t) > timeout;
            if self.left.as_ref().is_some_and(stale) {
                self.left = None;
            }
            if self.right.as_ref().is_some_and(stale) {
                self.right = None;
            }
        }
        InputIntent::new(self.left.is_some(), self.right.is_some())
    }

    pub fn reset(&mut self) {
        self.left = None;
        self.right = None;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
