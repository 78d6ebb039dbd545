//! Integration tests for the game lifecycle through the public API.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent};

use flappy_tui::core::{GameState, Leaderboard, Moment, Phase};
use flappy_tui::input::map_event;
use flappy_tui::types::{Difficulty, GameAction, SoundEvent, DEFAULT_WIDTH};

fn key(code: KeyCode) -> GameAction {
    map_event(&Event::Key(KeyEvent::from(code))).expect("mapped key")
}

/// Flap every 15 ticks: keeps the bird airborne for a few arcs.
fn fly(game: &mut GameState, now: Moment, ticks: usize) {
    for i in 0..ticks {
        if i % 15 == 0 {
            game.handle(GameAction::Flap, now);
        }
        game.tick(now);
    }
}

#[test]
fn test_run_lifecycle() {
    let start = Moment::now();
    let mut game = GameState::new(2024);
    assert_eq!(game.phase(), Phase::Title);

    let fx = game.handle(key(KeyCode::Char(' ')), start);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(fx.schedule_tick, Some(Duration::from_millis(45)));

    // Without flapping the bird drops out of a 24-row playfield on tick 9.
    let mut ticks = 0;
    let mut last = None;
    while game.phase() == Phase::Playing {
        ticks += 1;
        let fx = game.tick(start.after(Duration::from_millis(45 * ticks)));
        assert!(ticks < 20, "run never ended");
        last = Some(fx);
    }
    assert_eq!(ticks, 9);

    let fx = last.expect("effects");
    assert!(fx.schedule_tick.is_none());
    assert_eq!(fx.sounds.as_slice(), &[SoundEvent::GameOver]);

    let record = fx.persist.expect("record");
    assert_eq!(record.score, 0);
    assert_eq!(record.duration, Duration::from_millis(45 * 9));
    assert_eq!(record.jump_count, 0);
    assert_eq!(record.max_height, 12);
    assert_eq!(record.difficulty, "Normal");
    assert_eq!(game.elapsed(start.instant + Duration::from_secs(30)), record.duration);

    // Restart from the game-over screen.
    let fx = game.handle(key(KeyCode::Char('r')), start);
    assert_eq!(game.phase(), Phase::Playing);
    assert!(fx.schedule_tick.is_some());
    assert_eq!(game.stats().height_samples, 0);
}

#[test]
fn test_ticks_keep_rescheduling_while_alive() {
    let now = Moment::now();
    let mut game = GameState::new(7).with_difficulty(Difficulty::Easy);
    game.handle(GameAction::Flap, now);

    for i in 0..45 {
        if i % 15 == 0 {
            game.handle(GameAction::Flap, now);
        }
        let fx = game.tick(now);
        assert_eq!(game.phase(), Phase::Playing, "crashed on tick {i}");
        assert_eq!(fx.schedule_tick, Some(Duration::from_millis(60)));
    }

    assert_eq!(game.stats().jump_count, 3);
    assert_eq!(game.stats().height_samples, 45);
    assert_eq!(game.pipes().len(), 1);
    assert_eq!(game.pipes()[0].x, DEFAULT_WIDTH as i32 - 44);
    assert_eq!(game.pipes()[0].gap_size, 15);
}

#[test]
fn test_same_seed_same_pipes() {
    let now = Moment::now();
    let mut a = GameState::new(99);
    let mut b = GameState::new(99);

    for _ in 0..3 {
        a.handle(GameAction::Flap, now);
        b.handle(GameAction::Flap, now);
        fly(&mut a, now, 40);
        fly(&mut b, now, 40);
        assert_eq!(a.pipes(), b.pipes());
        assert_eq!(a.bird(), b.bird());

        // End the run and go again.
        while a.phase() == Phase::Playing {
            a.tick(now);
        }
        while b.phase() == Phase::Playing {
            b.tick(now);
        }
    }
}

#[test]
fn test_title_menu_only_on_title() {
    let now = Moment::now();
    let mut game = GameState::new(1);

    game.handle(key(KeyCode::Char('3')), now);
    game.handle(key(KeyCode::Char('t')), now);
    assert_eq!(game.difficulty(), Difficulty::Hard);
    assert_eq!(game.theme().name(), "Retro");

    game.handle(key(KeyCode::Enter), now);
    assert_eq!(game.tick_interval(), Duration::from_millis(30));

    game.handle(key(KeyCode::Char('1')), now);
    game.handle(key(KeyCode::Char('t')), now);
    assert_eq!(game.difficulty(), Difficulty::Hard);
    assert_eq!(game.theme().name(), "Retro");
}

#[test]
fn test_quit_keys_from_every_phase() {
    let now = Moment::now();
    let mut game = GameState::new(1);
    assert!(game.handle(key(KeyCode::Char('q')), now).quit);

    game.handle(GameAction::Flap, now);
    assert!(game.handle(key(KeyCode::Esc), now).quit);

    while game.phase() == Phase::Playing {
        game.tick(now);
    }
    assert!(game.handle(key(KeyCode::Char('q')), now).quit);
}

#[test]
fn test_new_record_flag_uses_leaderboard() {
    let now = Moment::now();
    let mut game = GameState::new(5).with_leaderboard(Leaderboard::default());
    game.handle(GameAction::Flap, now);
    while game.phase() == Phase::Playing {
        game.tick(now);
    }
    // Zero never beats an empty leaderboard.
    assert!(!game.is_new_record());
}

#[test]
fn test_resize_event_changes_playfield() {
    let now = Moment::now();
    let mut game = GameState::new(1);
    let action = map_event(&Event::Resize(120, 41)).expect("resize");
    game.handle(action, now);
    assert_eq!(game.playfield().width(), 120);
    assert_eq!(game.playfield().height(), 40);

    game.handle(GameAction::Flap, now);
    assert_eq!(game.bird().row(), 20);
    game.tick(now);
    assert_eq!(game.pipes()[0].x, 120);

    // Tiny terminals clamp to the minimum playfield.
    game.handle(map_event(&Event::Resize(20, 5)).expect("resize"), now);
    assert_eq!(game.playfield().width(), 40);
    assert_eq!(game.playfield().height(), 10);
}
