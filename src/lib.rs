//! Cloud Jump (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `cloud_jump::{core,input,store,term,types}` and owns the
//! runtime configuration used by the terminal binary.

pub mod config;

pub use cloud_jump_core as core;
pub use cloud_jump_input as input;
pub use cloud_jump_store as store;
pub use cloud_jump_term as term;
pub use cloud_jump_types as types;

pub use config::GameConfig;
