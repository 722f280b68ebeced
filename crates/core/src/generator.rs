//! Procedural content: platforms, vertical gaps and clouds.
//!
//! Every function here is pure apart from the draws it takes from the
//! supplied [`RandomSource`]. The draw order is part of the contract so a
//! seeded run always lays out the same level.

use crate::rng::RandomSource;
use crate::types::{
    PlatformKind, BOUNCY_CHANCE, CLOUD_MAX_DRIFT, CLOUD_MAX_R, CLOUD_MIN_DRIFT, CLOUD_MIN_R,
    CLOUD_RESPAWN_MAX, CLOUD_RESPAWN_MIN, PLATFORM_GAP_MAX, PLATFORM_GAP_MIN, PLATFORM_MARGIN,
    PLATFORM_MAX_W, PLATFORM_MIN_W, WORLD_WIDTH,
};
use crate::world::{Cloud, Platform};

/// Build a platform whose top edge sits at `y`.
///
/// Draws, in order: width in `[PLATFORM_MIN_W, PLATFORM_MAX_W)`, `x` such that
/// the platform keeps [`PLATFORM_MARGIN`] free on both sides, then the kind
/// (bouncy with probability [`BOUNCY_CHANCE`]).
pub fn make_platform<R: RandomSource + ?Sized>(rng: &mut R, y: f32) -> Platform {
    let w = rng.range(PLATFORM_MIN_W, PLATFORM_MAX_W);
    let x = rng.range(PLATFORM_MARGIN, WORLD_WIDTH - w - PLATFORM_MARGIN);
    let kind = if rng.chance(BOUNCY_CHANCE) {
        PlatformKind::Bouncy
    } else {
        PlatformKind::Normal
    };
    Platform::new(x, y, w, kind)
}

/// Vertical distance between consecutive platforms.
pub fn next_gap<R: RandomSource + ?Sized>(rng: &mut R) -> f32 {
    rng.range(PLATFORM_GAP_MIN, PLATFORM_GAP_MAX)
}

/// Cloud for a fresh run, anywhere in `y ∈ [min_y, max_y)`.
pub fn make_cloud<R: RandomSource + ?Sized>(rng: &mut R, min_y: f32, max_y: f32) -> Cloud {
    Cloud {
        x: rng.range(0.0, WORLD_WIDTH),
        y: rng.range(min_y, max_y),
        r: rng.range(CLOUD_MIN_R, CLOUD_MAX_R),
        drift: rng.range(CLOUD_MIN_DRIFT, CLOUD_MAX_DRIFT),
    }
}

/// Move a cloud that drifted off the bottom to somewhere above the camera.
pub fn respawn_cloud<R: RandomSource + ?Sized>(rng: &mut R, cloud: &mut Cloud, camera_y: f32) {
    cloud.y = camera_y - rng.range(CLOUD_RESPAWN_MIN, CLOUD_RESPAWN_MAX);
    cloud.x = rng.range(0.0, WORLD_WIDTH);
    cloud.r = rng.range(CLOUD_MIN_R, CLOUD_MAX_R);
    cloud.drift = rng.range(CLOUD_MIN_DRIFT, CLOUD_MAX_DRIFT);
}
