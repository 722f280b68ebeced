use arrayvec::ArrayVec;

use crate::types::{CLOUD_COUNT, PLATFORM_COUNT, WORLD_HEIGHT};
use crate::world::{Cloud, Platform, Player};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub player: Player,
    pub platforms: ArrayVec<Platform, PLATFORM_COUNT>,
    pub clouds: ArrayVec<Cloud, CLOUD_COUNT>,
    pub camera_y: f32,
    pub score: u32,
    pub best: u32,
    pub time_ms: u64,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.player = Player::default();
        self.platforms.clear();
        self.clouds.clear();
        self.camera_y = 0.0;
        self.score = 0;
        self.best = 0;
        self.time_ms = 0;
        self.game_over = false;
    }

    /// Convert a world `y` into a screen `y` (0 = top edge of the screen).
    pub fn screen_y(&self, world_y: f32) -> f32 {
        world_y - self.camera_y
    }

    /// Whether a band `[screen_y - margin, screen_y + margin]` touches the screen.
    pub fn on_screen(&self, world_y: f32, margin: f32) -> bool {
        let y = self.screen_y(world_y);
        y >= -margin && y <= WORLD_HEIGHT + margin
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            player: Player::default(),
            platforms: ArrayVec::new(),
            clouds: ArrayVec::new(),
            camera_y: 0.0,
            score: 0,
            best: 0,
            time_ms: 0,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameState;

    #[test]
    fn snapshot_mirrors_state() {
        let mut state = GameState::new(5);
        state.best = 77;
        let snap = state.snapshot();

        assert_eq!(snap.player, state.player);
        assert_eq!(snap.platforms.as_slice(), state.platforms.as_slice());
        assert_eq!(snap.clouds.as_slice(), state.clouds.as_slice());
        assert_eq!(snap.best, 77);
        assert!(!snap.game_over);
    }

    #[test]
    fn snapshot_into_reuses_buffer() {
        let state = GameState::new(5);
        let mut snap = GameSnapshot::default();
        state.snapshot_into(&mut snap);
        state.snapshot_into(&mut snap);
        assert_eq!(snap.platforms.len(), PLATFORM_COUNT);

        snap.clear();
        assert!(snap.platforms.is_empty());
    }

    #[test]
    fn screen_space_helpers() {
        let mut snap = GameSnapshot::default();
        snap.camera_y = -1_000.0;
        assert_eq!(snap.screen_y(-900.0), 100.0);
        assert!(snap.on_screen(-1_030.0, 40.0));
        assert!(!snap.on_screen(-1_050.0, 40.0));
        assert!(!snap.on_screen(-300.0, 40.0));
    }
}
