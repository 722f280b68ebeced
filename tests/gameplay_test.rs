//! Long-running gameplay properties through the facade crate.

use cloud_jump::core::{GameState, Platform};
use cloud_jump::types::{
    InputIntent, PlatformKind, BOUNCY_MULTIPLIER, JUMP_VELOCITY, PLATFORM_COUNT, PLATFORM_MARGIN,
    PLAYER_H, PLAYER_W, WORLD_HEIGHT, WORLD_WIDTH,
};

/// Left for a while, right for a while, sometimes nothing.
fn scripted_intent(step: u32) -> InputIntent {
    match (step / 90) % 4 {
        0 => InputIntent::new(false, true),
        1 => InputIntent::NONE,
        2 => InputIntent::new(true, false),
        _ => InputIntent::new(true, true),
    }
}

#[test]
fn invariants_hold_over_long_runs() {
    for seed in [1, 7, 42, 12345, 0xdead_beef] {
        let mut state = GameState::new(seed);
        let mut last_score = 0;
        let mut last_camera = state.camera_y;
        let mut was_over = false;

        for step in 0..3_000 {
            let outcome = state.step(16, scripted_intent(step));

            assert_eq!(state.platforms.len(), PLATFORM_COUNT, "seed {seed}");
            assert!(state.score >= last_score, "score dropped (seed {seed})");
            assert!(state.camera_y <= last_camera, "camera scrolled down (seed {seed})");
            assert!(state.best >= state.score);
            assert!(state.player.x >= -PLAYER_W && state.player.x <= WORLD_WIDTH);
            for plat in state.platforms.iter() {
                assert!(plat.left() >= PLATFORM_MARGIN);
                assert!(plat.right() <= WORLD_WIDTH - PLATFORM_MARGIN + 1e-3);
            }
            if was_over {
                assert!(state.game_over, "game over must be sticky");
                assert!(!outcome.game_over, "transition reported twice");
            }
            if let Some(kind) = outcome.landed {
                let expected = match kind {
                    PlatformKind::Normal => JUMP_VELOCITY,
                    PlatformKind::Bouncy => JUMP_VELOCITY * BOUNCY_MULTIPLIER,
                };
                assert_eq!(state.player.vy, expected);
            }

            last_score = state.score;
            last_camera = state.camera_y;
            was_over = state.game_over;
        }
    }
}

#[test]
fn idle_player_keeps_bouncing_on_start_platform() {
    let mut state = GameState::new(3);
    // Park every seeded platform away from the player's column.
    for plat in state.platforms.iter_mut().skip(1) {
        plat.x = 400.0;
        plat.w = 70.0;
    }
    let mut landings = 0;
    for _ in 0..600 {
        if state.step(16, InputIntent::NONE).landed.is_some() {
            landings += 1;
        }
    }
    assert!(!state.game_over);
    assert!(landings >= 5, "only {landings} landings");
    assert_eq!(state.camera_y, 0.0);
    assert!(state.player.bottom() <= state.platforms[0].top());
}

#[test]
fn landing_scenario_normal_and_bouncy() {
    for (kind, vy) in [
        (PlatformKind::Normal, -10.5),
        (PlatformKind::Bouncy, -13.125),
    ] {
        let mut state = GameState::new(9);
        for plat in state.platforms.iter_mut() {
            plat.y = -5_000.0;
        }
        state.platforms[0] = Platform::new(40.0, 10.0, 100.0, kind);
        state.player.x = 60.0;
        state.player.y = -26.0;
        state.player.vx = 0.0;
        state.player.vy = 5.0;

        let outcome = state.step(16, InputIntent::NONE);

        assert_eq!(outcome.landed, Some(kind));
        assert_eq!(state.player.y, -24.0);
        assert_eq!(state.player.y + PLAYER_H, 10.0);
        assert_eq!(state.player.vy, vy);
    }
}

#[test]
fn falling_below_screen_ends_run_and_reset_starts_over() {
    let mut state = GameState::new(5);
    for plat in state.platforms.iter_mut() {
        plat.x = 400.0;
        plat.w = 70.0;
    }
    state.player.x = 20.0;

    let mut steps = 0;
    while !state.game_over {
        state.step(16, InputIntent::NONE);
        steps += 1;
        assert!(steps < 1_000, "never fell off");
    }
    assert!(state.player.y - state.camera_y > WORLD_HEIGHT);

    let frozen = state.snapshot();
    state.step(16, InputIntent::new(false, true));
    assert_eq!(state.snapshot(), frozen);

    state.best = 77;
    state.reset();
    assert!(!state.game_over);
    assert_eq!(state.score, 0);
    assert_eq!(state.best, 77);
    assert_eq!(state.camera_y, 0.0);
    assert_eq!(state.platforms.len(), PLATFORM_COUNT);
}
