//! GameState: one run of the jumper and its update step.
//!
//! The state owns a fixed pool of platforms and clouds. Nothing is ever added
//! or removed during a run; entities that scroll out below the screen are
//! relocated above it instead.

use arrayvec::ArrayVec;

use crate::generator::{make_cloud, make_platform, next_gap, respawn_cloud};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{
    InputIntent, PlatformKind, CAMERA_DEADZONE, CLOUD_COUNT, CLOUD_RECYCLE_MARGIN, FALL_MARGIN,
    GRAVITY, MAX_HSPEED, MOVE_ACCEL, MOVE_FRICTION, PLATFORM_COUNT, PLATFORM_RECYCLE_MARGIN,
    PLAYER_H, PLAYER_W, SCORE_DIVISOR, SEED_PLATFORM_COUNT, START_PLATFORM_W, WORLD_HEIGHT,
    WORLD_WIDTH,
};
use crate::world::{Cloud, Platform, Player};

/// Vertical velocity of the hop the player starts every run with.
const START_VY: f32 = -8.0;

/// What happened during a single [`GameState::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Kind of the platform the player bounced off, if any.
    pub landed: Option<PlatformKind>,
    /// Set when this step raised the best score.
    pub new_best: Option<u32>,
    /// `true` only on the step that ended the run.
    pub game_over: bool,
    /// Platforms relocated above the screen during this step.
    pub recycled: u8,
}

/// Complete state of one run.
///
/// Generic over the random source so tests can pin the level layout; the
/// default is the seedable [`SimpleRng`].
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    pub player: Player,
    pub platforms: ArrayVec<Platform, PLATFORM_COUNT>,
    pub clouds: ArrayVec<Cloud, CLOUD_COUNT>,
    /// World `y` of the top edge of the screen. Only ever decreases.
    pub camera_y: f32,
    /// Smallest (highest) `y` the player has reached this run.
    pub peak_y: f32,
    pub score: u32,
    pub best: u32,
    pub time_ms: u64,
    pub game_over: bool,
    rng: R,
}

impl GameState<SimpleRng> {
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Build a fresh run drawing its layout from `rng`.
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self {
            player: Player::default(),
            platforms: ArrayVec::new(),
            clouds: ArrayVec::new(),
            camera_y: 0.0,
            peak_y: 0.0,
            score: 0,
            best: 0,
            time_ms: 0,
            game_over: false,
            rng,
        };
        state.reset();
        state
    }

    /// Rebuild every entity for a new run. The best score survives.
    pub fn reset(&mut self) {
        self.camera_y = 0.0;
        self.peak_y = 0.0;
        self.score = 0;
        self.time_ms = 0;
        self.game_over = false;

        self.player = Player {
            x: WORLD_WIDTH * 0.5 - PLAYER_W * 0.5,
            y: WORLD_HEIGHT - 140.0,
            vx: 0.0,
            vy: START_VY,
        };

        self.platforms.clear();
        self.platforms.push(Platform::new(
            WORLD_WIDTH * 0.5 - START_PLATFORM_W * 0.5,
            WORLD_HEIGHT - 60.0,
            START_PLATFORM_W,
            PlatformKind::Normal,
        ));

        let mut y = WORLD_HEIGHT - 140.0;
        for _ in 0..SEED_PLATFORM_COUNT {
            y -= next_gap(&mut self.rng);
            self.platforms.push(make_platform(&mut self.rng, y));
        }

        self.clouds.clear();
        for _ in 0..CLOUD_COUNT {
            self.clouds
                .push(make_cloud(&mut self.rng, -WORLD_HEIGHT, WORLD_HEIGHT));
        }
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Player `y` relative to the top edge of the screen.
    pub fn player_screen_y(&self) -> f32 {
        self.player.y - self.camera_y
    }

    /// Advance the run by one step.
    ///
    /// Physics constants are per step; `elapsed_ms` only feeds the run clock.
    /// Does nothing once the run is over.
    pub fn step(&mut self, elapsed_ms: u32, intent: InputIntent) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        if self.game_over {
            return outcome;
        }

        let prev_y = self.integrate(intent);
        outcome.landed = self.resolve_landing(prev_y);
        self.follow_camera();
        outcome.new_best = self.update_score();
        outcome.recycled = self.recycle_platforms();
        self.drift_clouds();

        if self.player_screen_y() > WORLD_HEIGHT + FALL_MARGIN {
            self.game_over = true;
            outcome.game_over = true;
        }

        self.time_ms += elapsed_ms as u64;
        outcome
    }

    /// Apply input, gravity and one explicit Euler step. Returns the previous `y`.
    fn integrate(&mut self, intent: InputIntent) -> f32 {
        let p = &mut self.player;

        p.vx += intent.direction() * MOVE_ACCEL;
        p.vx *= MOVE_FRICTION;
        p.vx = p.vx.clamp(-MAX_HSPEED, MAX_HSPEED);

        p.vy += GRAVITY;

        let prev_y = p.y;
        p.x += p.vx;
        p.y += p.vy;
        p.wrap_x();

        prev_y
    }

    fn resolve_landing(&mut self, prev_y: f32) -> Option<PlatformKind> {
        if self.player.vy <= 0.0 {
            return None;
        }
        let idx = find_landing(&self.platforms, &self.player, prev_y)?;
        let plat = self.platforms[idx];

        self.player.y = plat.top() - PLAYER_H;
        self.player.vy = plat.kind.launch_velocity();
        Some(plat.kind)
    }

    fn follow_camera(&mut self) {
        let screen_y = self.player_screen_y();
        if screen_y < CAMERA_DEADZONE {
            self.camera_y -= CAMERA_DEADZONE - screen_y;
        }
    }

    fn update_score(&mut self) -> Option<u32> {
        self.peak_y = self.peak_y.min(self.player.y);
        let height_score = (-self.peak_y / SCORE_DIVISOR).floor() as u32;
        self.score = self.score.max(height_score);

        if self.score > self.best {
            self.best = self.score;
            Some(self.best)
        } else {
            None
        }
    }

    /// Relocate platforms that fell below the screen to the top of the column.
    ///
    /// Each relocated platform becomes the new topmost reference, so several
    /// platforms recycled in one step stack upward instead of overlapping.
    fn recycle_platforms(&mut self) -> u8 {
        let mut topmost = self
            .platforms
            .iter()
            .map(|p| p.y)
            .fold(f32::INFINITY, f32::min);
        let limit = self.camera_y + WORLD_HEIGHT + PLATFORM_RECYCLE_MARGIN;

        let mut recycled = 0u8;
        for plat in self.platforms.iter_mut() {
            if plat.y > limit {
                topmost -= next_gap(&mut self.rng);
                *plat = make_platform(&mut self.rng, topmost);
                recycled += 1;
            }
        }
        recycled
    }

    fn drift_clouds(&mut self) {
        for cloud in self.clouds.iter_mut() {
            cloud.y += cloud.drift;
            if cloud.y - self.camera_y > WORLD_HEIGHT + CLOUD_RECYCLE_MARGIN {
                respawn_cloud(&mut self.rng, cloud, self.camera_y);
            }
        }
    }

    /// Copy the renderable parts of the state into an existing snapshot.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.player = self.player;
        out.platforms.clear();
        out.platforms.extend(self.platforms.iter().copied());
        out.clouds.clear();
        out.clouds.extend(self.clouds.iter().copied());
        out.camera_y = self.camera_y;
        out.score = self.score;
        out.best = self.best;
        out.time_ms = self.time_ms;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

/// Index of the platform the player lands on this step, if any.
///
/// A landing needs a swept crossing of the platform's top edge by the player's
/// bottom edge (`prev_bottom <= top <= bottom`) and horizontal overlap at the
/// new position. Platforms are scanned in storage order and the first match
/// wins, even if a later platform is closer.
pub fn find_landing(platforms: &[Platform], player: &Player, prev_y: f32) -> Option<usize> {
    let prev_bottom = prev_y + PLAYER_H;
    let bottom = player.bottom();

    platforms.iter().position(|plat| {
        let top = plat.top();
        let crossed_top = prev_bottom <= top && bottom >= top;
        crossed_top && player.overlaps_x(plat)
    })
}
