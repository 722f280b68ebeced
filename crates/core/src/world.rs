//! World entities: the player, platforms and decorative clouds.
//!
//! All coordinates are world units with `y` growing downward.

use crate::types::{PlatformKind, PLAYER_H, PLAYER_W, WORLD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + PLAYER_W
    }

    pub fn bottom(&self) -> f32 {
        self.y + PLAYER_H
    }

    /// Toroidal wrap across the world width.
    ///
    /// The player has to leave the screen completely before reappearing on
    /// the other side.
    pub fn wrap_x(&mut self) {
        if self.x < -PLAYER_W {
            self.x = WORLD_WIDTH;
        }
        if self.x > WORLD_WIDTH {
            self.x = -PLAYER_W;
        }
    }

    /// Horizontal spans overlap (strictly; touching edges do not count).
    pub fn overlaps_x(&self, platform: &Platform) -> bool {
        self.right() > platform.left() && self.x < platform.right()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub w: f32,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, kind: PlatformKind) -> Self {
        Self { x, y, w, kind }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    /// Downward drift per step.
    pub drift: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_left_edge_reappears_right() {
        let mut p = Player::new(-PLAYER_W - 0.5, 0.0);
        p.wrap_x();
        assert_eq!(p.x, WORLD_WIDTH);
    }

    #[test]
    fn wrap_right_edge_reappears_left() {
        let mut p = Player::new(WORLD_WIDTH + 0.5, 0.0);
        p.wrap_x();
        assert_eq!(p.x, -PLAYER_W);
    }

    #[test]
    fn exact_bounds_do_not_wrap() {
        let mut p = Player::new(-PLAYER_W, 0.0);
        p.wrap_x();
        assert_eq!(p.x, -PLAYER_W);

        let mut p = Player::new(WORLD_WIDTH, 0.0);
        p.wrap_x();
        assert_eq!(p.x, WORLD_WIDTH);
    }

    #[test]
    fn overlap_excludes_touching_edges() {
        let plat = Platform::new(40.0, 10.0, 100.0, PlatformKind::Normal);

        assert!(Player::new(60.0, 0.0).overlaps_x(&plat));
        assert!(Player::new(139.0, 0.0).overlaps_x(&plat));
        assert!(!Player::new(140.0, 0.0).overlaps_x(&plat));
        assert!(!Player::new(40.0 - PLAYER_W, 0.0).overlaps_x(&plat));
    }
}
