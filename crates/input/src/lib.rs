//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into held-direction state and discrete
//! [`crate::types::GameAction`]s. The [`InputHandler`] turns held keys into the
//! per-step [`crate::types::InputIntent`], including on terminals that never
//! report key releases.

pub mod handler;
pub mod map;

pub use cloud_jump_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, key_direction, should_quit, Direction};
