//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # World Coordinates
//!
//! The world is a fixed-width column that extends upward without bound:
//!
//! - **Width**: 480 units; the player wraps around horizontally
//! - **Height**: 640 units are visible at once
//! - **Y axis**: grows downward, so climbing means *decreasing* `y`
//!
//! # Physics Constants
//!
//! All physics values are applied once per update step, independent of the
//! elapsed frame time:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | 0.35 | Added to vertical velocity every step |
//! | `JUMP_VELOCITY` | -10.5 | Vertical velocity after landing |
//! | `BOUNCY_MULTIPLIER` | 1.25 | Jump boost on bouncy platforms |
//! | `MOVE_ACCEL` | 0.55 | Horizontal acceleration while a direction is held |
//! | `MOVE_FRICTION` | 0.90 | Horizontal damping per step |
//! | `MAX_HSPEED` | 6.3 | Horizontal speed clamp |
//!
//! # Platform Generation
//!
//! | Constant | Value |
//! |----------|-------|
//! | `PLATFORM_MIN_W` | 70 |
//! | `PLATFORM_MAX_W` | 120 |
//! | `PLATFORM_GAP_MIN` | 55 |
//! | `PLATFORM_GAP_MAX` | 95 |
//! | `BOUNCY_CHANCE` | 0.12 |
//!
//! # Examples
//!
//! ```
//! use cloud_jump_types::{InputIntent, PlatformKind, JUMP_VELOCITY, WORLD_WIDTH};
//!
//! assert!(PlatformKind::Bouncy.launch_velocity() < JUMP_VELOCITY);
//!
//! let intent = InputIntent::new(true, false);
//! assert_eq!(intent.direction(), -1.0);
//!
//! assert_eq!(WORLD_WIDTH, 480.0);
//! ```

/// Visible world width.
pub const WORLD_WIDTH: f32 = 480.0;

/// Visible world height.
pub const WORLD_HEIGHT: f32 = 640.0;

/// Downward acceleration added to `vy` every step.
pub const GRAVITY: f32 = 0.35;

/// Vertical velocity applied on landing.
pub const JUMP_VELOCITY: f32 = -10.5;

/// Jump velocity multiplier for [`PlatformKind::Bouncy`].
pub const BOUNCY_MULTIPLIER: f32 = 1.25;

/// Horizontal acceleration while left or right is held.
pub const MOVE_ACCEL: f32 = 0.55;

/// Horizontal velocity multiplier applied every step.
pub const MOVE_FRICTION: f32 = 0.90;

/// Horizontal speed limit (both directions).
pub const MAX_HSPEED: f32 = 6.3;

/// Player bounding box width.
pub const PLAYER_W: f32 = 28.0;

/// Player bounding box height.
pub const PLAYER_H: f32 = 34.0;

pub const PLATFORM_MIN_W: f32 = 70.0;
pub const PLATFORM_MAX_W: f32 = 120.0;

/// Platform thickness. Only used for drawing; landings test the top edge.
pub const PLATFORM_H: f32 = 16.0;

/// Free space kept between a generated platform and either side of the world.
pub const PLATFORM_MARGIN: f32 = 10.0;

pub const PLATFORM_GAP_MIN: f32 = 55.0;
pub const PLATFORM_GAP_MAX: f32 = 95.0;

/// Probability that a generated platform is bouncy.
pub const BOUNCY_CHANCE: f32 = 0.12;

/// Generated platforms in a fresh run (the wide start platform comes on top).
pub const SEED_PLATFORM_COUNT: usize = 12;

/// Size of the platform pool: start platform + seeded platforms.
pub const PLATFORM_COUNT: usize = SEED_PLATFORM_COUNT + 1;

/// Width of the start platform under the spawn point.
pub const START_PLATFORM_W: f32 = 280.0;

/// Number of decorative clouds.
pub const CLOUD_COUNT: usize = 10;

pub const CLOUD_MIN_R: f32 = 18.0;
pub const CLOUD_MAX_R: f32 = 42.0;
pub const CLOUD_MIN_DRIFT: f32 = 0.15;
pub const CLOUD_MAX_DRIFT: f32 = 0.35;

/// Recycled clouds reappear this far above the camera: `[min, max)`.
pub const CLOUD_RESPAWN_MIN: f32 = 60.0;
pub const CLOUD_RESPAWN_MAX: f32 = 300.0;

/// Line (measured from the top of the screen) the player is pinned to while climbing.
pub const CAMERA_DEADZONE: f32 = WORLD_HEIGHT * 0.45;

/// How far below the screen the player may fall before the run ends.
pub const FALL_MARGIN: f32 = 120.0;

/// Platforms this far below the screen are recycled.
pub const PLATFORM_RECYCLE_MARGIN: f32 = 100.0;

/// Clouds this far below the screen are recycled.
pub const CLOUD_RECYCLE_MARGIN: f32 = 80.0;

/// World units of climb per score point.
pub const SCORE_DIVISOR: f32 = 10.0;

/// Upper bound for the elapsed time fed into a single step.
pub const MAX_FRAME_MS: u32 = 32;

/// Default frame period for the terminal loop (≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Persistence key for the best score.
pub const BEST_SCORE_KEY: &str = "cloudJumpBest";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_constants() {
        assert_eq!(PLATFORM_COUNT, 13);
        assert_eq!(CAMERA_DEADZONE, 288.0);
        assert_eq!(JUMP_VELOCITY * BOUNCY_MULTIPLIER, -13.125);
    }

    #[test]
    fn intent_direction_cancels_when_both_held() {
        assert_eq!(InputIntent::NONE.direction(), 0.0);
        assert_eq!(InputIntent::new(true, false).direction(), -1.0);
        assert_eq!(InputIntent::new(false, true).direction(), 1.0);
        assert_eq!(InputIntent::new(true, true).direction(), 0.0);
    }

    #[test]
    fn widest_platform_fits_between_margins() {
        assert!(PLATFORM_MAX_W + 2.0 * PLATFORM_MARGIN <= WORLD_WIDTH);
        assert!(START_PLATFORM_W <= WORLD_WIDTH);
    }
}

/// Platform flavours.
///
/// - **Normal**: landing launches the player with [`JUMP_VELOCITY`]
/// - **Bouncy**: landing launches with `JUMP_VELOCITY * BOUNCY_MULTIPLIER`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlatformKind {
    #[default]
    Normal,
    Bouncy,
}

impl PlatformKind {
    /// Vertical velocity given to a player landing on this kind of platform.
    ///
    /// ```
    /// use cloud_jump_types::{PlatformKind, JUMP_VELOCITY};
    ///
    /// assert_eq!(PlatformKind::Normal.launch_velocity(), JUMP_VELOCITY);
    /// assert_eq!(PlatformKind::Bouncy.launch_velocity(), -13.125);
    /// ```
    pub fn launch_velocity(&self) -> f32 {
        match self {
            PlatformKind::Normal => JUMP_VELOCITY,
            PlatformKind::Bouncy => JUMP_VELOCITY * BOUNCY_MULTIPLIER,
        }
    }
}

/// Directional intent for one update step.
///
/// Produced by the input layer from held keys and consumed by the next tick.
/// Holding both directions cancels out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputIntent {
    pub left: bool,
    pub right: bool,
}

impl InputIntent {
    pub const NONE: InputIntent = InputIntent {
        left: false,
        right: false,
    };

    pub fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }

    /// Net horizontal direction: -1, 0 or 1.
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Discrete actions that are not part of the per-step intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Rebuild the run. Only honored after game over.
    Restart,
    /// Leave the game loop.
    Quit,
}
