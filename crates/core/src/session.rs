//! Session: the single owner of a run, its random source and the best-score store.
//!
//! The frame loop talks to the game only through a session: one `tick` per
//! frame with the current [`InputIntent`], discrete [`GameAction`]s in between.

use log::{debug, info, warn};

use crate::game_state::{GameState, StepOutcome};
use crate::snapshot::GameSnapshot;
use crate::store::BestScoreStore;
use crate::types::{GameAction, InputIntent, MAX_FRAME_MS};

pub struct Session<S: BestScoreStore> {
    state: GameState,
    store: S,
    seed: u32,
    runs: u32,
}

impl<S: BestScoreStore> Session<S> {
    /// Start the first run. The best score is read from `store` exactly once.
    pub fn new(seed: u32, mut store: S) -> Self {
        let best = store.load();
        info!("session start: seed={} best={}", seed, best);

        let mut state = GameState::new(seed);
        state.best = best;
        Self {
            state,
            store,
            seed,
            runs: 1,
        }
    }

    /// Advance one frame.
    ///
    /// `elapsed_ms` is clamped to [`MAX_FRAME_MS`]. A new best is written to the
    /// store immediately; a failed write is logged and play continues.
    pub fn tick(&mut self, elapsed_ms: u32, intent: InputIntent) -> StepOutcome {
        let dt = elapsed_ms.min(MAX_FRAME_MS);
        let outcome = self.state.step(dt, intent);

        if let Some(best) = outcome.new_best {
            match self.store.save(best) {
                Ok(()) => debug!("best score saved: {}", best),
                Err(err) => warn!("failed to save best score {}: {:#}", best, err),
            }
        }
        if outcome.game_over {
            info!(
                "run {} over: score={} best={} time_ms={}",
                self.runs, self.state.score, self.state.best, self.state.time_ms
            );
        }
        outcome
    }

    /// Apply a discrete action. Returns `true` if it changed the session.
    ///
    /// `Restart` is ignored while a run is still in progress; `Quit` is left to
    /// the caller.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart if self.state.game_over => {
                self.state.reset();
                self.runs += 1;
                info!("run {} started", self.runs);
                true
            }
            GameAction::Restart | GameAction::Quit => false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Runs played so far, including the current one.
    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best(&self) -> u32 {
        self.state.best
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use anyhow::anyhow;

    struct FailingStore;

    impl BestScoreStore for FailingStore {
        fn load(&mut self) -> u32 {
            3
        }

        fn save(&mut self, _best: u32) -> anyhow::Result<()> {
            Err(anyhow!("disk full"))
        }
    }

    fn climb_to(session: &mut Session<MemoryStore>, y: f32) {
        let state = session.state_mut();
        state.platforms.clear();
        state.player.y = y;
        state.player.vy = 0.0;
    }

    #[test]
    fn loads_best_once_at_start() {
        let session = Session::new(1, MemoryStore::with_raw("150"));
        assert_eq!(session.best(), 150);
        assert_eq!(session.store().writes(), 0);
    }

    #[test]
    fn lower_score_does_not_overwrite_best() {
        let mut session = Session::new(1, MemoryStore::with_raw("150"));
        climb_to(&mut session, -1_205.0);
        session.tick(16, InputIntent::NONE);

        assert_eq!(session.score(), 120);
        assert_eq!(session.best(), 150);
        assert_eq!(session.store().raw(), Some("150"));
        assert_eq!(session.store().writes(), 0);
    }

    #[test]
    fn higher_score_overwrites_best() {
        let mut session = Session::new(1, MemoryStore::with_raw("150"));
        climb_to(&mut session, -2_005.0);
        session.tick(16, InputIntent::NONE);

        assert_eq!(session.score(), 200);
        assert_eq!(session.best(), 200);
        assert_eq!(session.store().raw(), Some("200"));
    }

    #[test]
    fn elapsed_time_is_clamped() {
        let mut session = Session::new(1, MemoryStore::new());
        session.tick(1_000, InputIntent::NONE);
        assert_eq!(session.state().time_ms, MAX_FRAME_MS as u64);
        session.tick(10, InputIntent::NONE);
        assert_eq!(session.state().time_ms, MAX_FRAME_MS as u64 + 10);
    }

    #[test]
    fn restart_only_after_game_over() {
        let mut session = Session::new(1, MemoryStore::new());
        assert!(!session.apply(GameAction::Restart));
        assert_eq!(session.runs(), 1);

        session.state_mut().game_over = true;
        assert!(session.apply(GameAction::Restart));
        assert!(!session.is_game_over());
        assert_eq!(session.runs(), 2);

        assert!(!session.apply(GameAction::Quit));
    }

    #[test]
    fn best_survives_restart() {
        let mut session = Session::new(1, MemoryStore::new());
        climb_to(&mut session, -505.0);
        session.tick(16, InputIntent::NONE);
        assert_eq!(session.best(), 50);

        session.state_mut().game_over = true;
        session.apply(GameAction::Restart);
        assert_eq!(session.score(), 0);
        assert_eq!(session.best(), 50);
    }

    #[test]
    fn save_failure_does_not_stop_play() {
        let mut session = Session::new(1, FailingStore);
        assert_eq!(session.best(), 3);
        let state = session.state_mut();
        state.platforms.clear();
        state.player.y = -100.0;
        state.player.vy = 0.0;

        let outcome = session.tick(16, InputIntent::NONE);
        assert_eq!(outcome.new_best, Some(9));
        assert_eq!(session.best(), 9);
    }
}
