//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the jumper: physics, landings, camera,
//! scoring and procedural level generation. It has **no dependencies** on
//! terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same level layout
//! - **Testable**: Unit tests for every rule of the update step
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free per step**: platforms and clouds live in fixed pools
//!
//! # Module Structure
//!
//! - [`world`]: player, platform and cloud entities
//! - [`generator`]: randomized platforms, gaps and clouds
//! - [`game_state`]: a complete run and its update step
//! - [`rng`]: injectable random source and a seedable LCG
//! - [`snapshot`]: renderable copy of the state
//! - [`store`]: best-score persistence seam
//! - [`session`]: loop controller owning the state and the store
//!
//! # Game Rules
//!
//! - **Auto-bounce**: Landing on a platform from above launches the player upward;
//!   bouncy platforms launch 25% harder
//! - **Swept landings**: A landing is detected when the player's bottom edge crosses
//!   a platform's top edge during the step, so fast falls never tunnel through
//! - **Wraparound**: Leaving one side of the screen re-enters from the other
//! - **Camera**: Follows the player upward past a dead-zone line, never down
//! - **Score**: Peak height climbed divided by 10, never decreasing
//! - **Game over**: Falling too far below the screen ends the run
//!
//! # Example
//!
//! ```
//! use cloud_jump_core::GameState;
//! use cloud_jump_types::InputIntent;
//!
//! let mut game = GameState::new(12345);
//!
//! for _ in 0..60 {
//!     game.step(16, InputIntent::new(false, true));
//! }
//!
//! assert!(!game.game_over);
//! assert!(game.player.vx > 0.0);
//! ```
//!
//! # Timing
//!
//! Physics constants are applied once per step, so the step rate sets the game
//! speed. Callers should step at a steady ~60 Hz; [`Session::tick`] clamps the
//! reported elapsed time to 32ms.

pub mod game_state;
pub mod generator;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod store;
pub mod world;

pub use cloud_jump_types as types;

// Re-export commonly used types for convenience
pub use game_state::{find_landing, GameState, StepOutcome};
pub use generator::{make_platform, next_gap};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use session::Session;
pub use snapshot::GameSnapshot;
pub use store::{BestScoreStore, MemoryStore};
pub use world::{Cloud, Platform, Player};
