use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use cloud_jump::core::GameState;
use cloud_jump::input::{handle_key_event, InputHandler};
use cloud_jump::types::{GameAction, InputIntent};

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

#[test]
fn held_right_key_moves_player_right() {
    let mut input = InputHandler::new().with_key_release_timeout(None);
    let mut state = GameState::new(11);
    let x0 = state.player.x;

    input.handle_key_event(key(KeyCode::Char('d'), KeyEventKind::Press));
    for _ in 0..10 {
        state.step(16, input.intent());
    }
    assert!(state.player.vx > 0.0);
    assert!(state.player.x > x0);

    input.handle_key_event(key(KeyCode::Char('d'), KeyEventKind::Release));
    assert_eq!(input.intent(), InputIntent::NONE);
}

#[test]
fn tapped_key_is_released_after_timeout() {
    let mut input = InputHandler::new().with_key_release_timeout(Some(Duration::from_millis(100)));
    let t0 = Instant::now();
    input.handle_key_press_at(KeyCode::Left, t0);

    assert_eq!(
        input.intent_at(t0 + Duration::from_millis(16)),
        InputIntent::new(true, false)
    );
    assert_eq!(
        input.intent_at(t0 + Duration::from_millis(250)),
        InputIntent::NONE
    );
}

#[test]
fn movement_keys_are_not_game_actions() {
    for code in [KeyCode::Left, KeyCode::Right, KeyCode::Char('a'), KeyCode::Char('d')] {
        assert_eq!(handle_key_event(KeyEvent::from(code)), None);
    }
    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
        Some(GameAction::Restart)
    );
    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Esc)),
        Some(GameAction::Quit)
    );
}
