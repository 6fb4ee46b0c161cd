use std::time::Duration;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect as Area;

use alien_invasion::app::App;
use alien_invasion::assets;
use alien_invasion::event::Event;
use alien_invasion::game::Game;
use alien_invasion::input::{Command, KeyTracker};
use alien_invasion::settings::Settings;
use alien_invasion::sprites::{Alien, Sprite};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

fn repeat(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Repeat)
}

fn new_app(release_events: bool) -> App {
    let game = Game::new(
        Settings::new(),
        assets::load_ship().unwrap(),
        assets::load_alien().unwrap(),
    );
    App::new(game, release_events)
}

// ── KeyTracker ────────────────────────────────────────────────────────────────

#[test]
fn key_map() {
    let mut keys = KeyTracker::new(true, Duration::from_millis(16));
    assert_eq!(keys.translate(press(KeyCode::Right), 0), Some(Command::MoveRight(true)));
    assert_eq!(keys.translate(press(KeyCode::Char('a')), 0), Some(Command::MoveLeft(true)));
    assert_eq!(keys.translate(press(KeyCode::Char(' ')), 0), Some(Command::Fire));
    assert_eq!(keys.translate(press(KeyCode::Char('p')), 0), Some(Command::Start));
    assert_eq!(keys.translate(press(KeyCode::Enter), 0), Some(Command::Start));
    assert_eq!(keys.translate(press(KeyCode::Char('q')), 0), Some(Command::Quit));
    assert_eq!(keys.translate(press(KeyCode::Esc), 0), Some(Command::Quit));
    assert_eq!(
        keys.translate(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), 0),
        Some(Command::Quit)
    );
    assert_eq!(keys.translate(press(KeyCode::Char('z')), 0), None);
}

#[test]
fn fire_ignores_repeats_and_releases() {
    let mut keys = KeyTracker::new(true, Duration::from_millis(16));
    assert_eq!(keys.translate(repeat(KeyCode::Char(' ')), 0), None);
    assert_eq!(keys.translate(release(KeyCode::Char(' ')), 0), None);
}

#[test]
fn real_releases_stop_movement() {
    let mut keys = KeyTracker::new(true, Duration::from_millis(16));
    keys.translate(press(KeyCode::Left), 0);
    assert!(keys.expire(1_000).is_empty());
    assert_eq!(keys.translate(release(KeyCode::Left), 5), Some(Command::MoveLeft(false)));
}

#[test]
fn quiet_keys_are_released_without_release_events() {
    let mut keys = KeyTracker::new(false, Duration::from_millis(16));
    assert_eq!(keys.hold_ticks(), 13);
    assert_eq!(keys.grace_ticks(), 44);

    keys.translate(press(KeyCode::Right), 0);
    assert!(keys.expire(44).is_empty());
    assert_eq!(keys.expire(45), vec![Command::MoveRight(false)]);
    assert!(keys.expire(46).is_empty());
}

#[test]
fn fresh_press_survives_the_first_repeat_delay() {
    let mut keys = KeyTracker::new(false, Duration::from_millis(16));
    keys.translate(press(KeyCode::Right), 0);
    // Silent until the first autorepeat at ~500 ms.
    for tick in 1..=31 {
        assert!(keys.expire(tick).is_empty(), "released at tick {tick}");
    }
    // Without enhancement, autorepeats arrive as presses.
    assert_eq!(keys.translate(press(KeyCode::Right), 31), Some(Command::MoveRight(true)));
    assert!(keys.expire(44).is_empty());
    assert_eq!(keys.expire(45), vec![Command::MoveRight(false)]);
}

#[test]
fn repeats_keep_a_key_held() {
    let mut keys = KeyTracker::new(false, Duration::from_millis(16));
    keys.translate(press(KeyCode::Left), 0);
    assert_eq!(keys.translate(repeat(KeyCode::Left), 10), Some(Command::MoveLeft(true)));
    assert!(keys.expire(20).is_empty());
    assert_eq!(keys.expire(24), vec![Command::MoveLeft(false)]);
}

#[test]
fn a_new_press_after_a_release_gets_the_grace_again() {
    let mut keys = KeyTracker::new(false, Duration::from_millis(16));
    keys.translate(press(KeyCode::Left), 0);
    keys.translate(press(KeyCode::Left), 30);
    assert_eq!(keys.expire(44), vec![Command::MoveLeft(false)]);

    keys.translate(press(KeyCode::Left), 50);
    assert!(keys.expire(94).is_empty());
    assert_eq!(keys.expire(95), vec![Command::MoveLeft(false)]);
}

// ── App ───────────────────────────────────────────────────────────────────────

#[test]
fn quit_keys_quit() {
    for key in [
        press(KeyCode::Char('q')),
        press(KeyCode::Esc),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut app = new_app(true);
        app.on_key(key);
        assert!(app.should_quit);
    }
}

#[test]
fn a_tick_backlog_is_replayed_before_a_queued_quit() {
    let mut app = new_app(true);
    app.on_event(Event::Key(press(KeyCode::Enter)));
    for _ in 0..50 {
        app.on_event(Event::Tick);
    }
    assert!(app.game.aliens()[0].rect().x > 60);
    app.on_event(Event::Key(press(KeyCode::Char('q'))));
    assert!(app.should_quit);
}

#[test]
fn p_starts_and_arrows_steer() {
    let mut app = new_app(true);
    app.on_key(press(KeyCode::Char('p')));
    assert!(app.game.is_active());

    app.on_key(press(KeyCode::Right));
    assert!(app.game.ship().moving_right);
    app.on_key(press(KeyCode::Left));
    assert!(app.game.ship().moving_left);
    app.on_key(release(KeyCode::Right));
    assert!(!app.game.ship().moving_right);
    assert!(app.game.ship().moving_left);
}

#[test]
fn fallback_mode_keeps_a_held_key_until_it_goes_quiet() {
    let mut app = new_app(false);
    app.on_key(press(KeyCode::Enter));
    app.on_key(press(KeyCode::Right));
    for _ in 0..31 {
        app.on_tick();
        assert!(app.game.ship().moving_right);
    }
    // Autorepeat kicks in, then the key is let go.
    app.on_key(press(KeyCode::Right));
    for _ in 0..13 {
        app.on_tick();
        assert!(app.game.ship().moving_right);
    }
    app.on_tick();
    assert!(!app.game.ship().moving_right);
}

#[test]
fn input_during_hit_pause_is_deferred_not_dropped() {
    let mut app = new_app(true);
    app.on_key(press(KeyCode::Char('p')));
    app.game.fleet_mut().set_aliens(vec![Alien::new(570, 700, 60, 58)]);
    app.on_tick();
    assert!(app.game.is_paused());

    app.on_key(press(KeyCode::Char(' ')));
    app.on_key(press(KeyCode::Right));
    assert_eq!(app.deferred_len(), 2);
    assert!(!app.game.ship().moving_right);
    assert!(app.game.bullets().is_empty());

    while app.game.is_paused() {
        app.on_tick();
    }
    assert_eq!(app.deferred_len(), 0);
    assert!(app.game.ship().moving_right);
    assert_eq!(app.game.bullets().len(), 1);
}

#[test]
fn quit_is_immediate_even_while_paused() {
    let mut app = new_app(true);
    app.on_key(press(KeyCode::Char('p')));
    app.game.fleet_mut().set_aliens(vec![Alien::new(570, 700, 60, 58)]);
    app.on_tick();
    assert!(app.game.is_paused());

    app.on_key(press(KeyCode::Char('q')));
    assert!(app.should_quit);
    assert_eq!(app.deferred_len(), 0);
}

#[test]
fn clicking_the_play_button_starts() {
    let mut app = new_app(true);
    app.field_area = Area::new(1, 1, 80, 20);
    assert_eq!(app.cell_to_pixel(0, 0), None);
    assert_eq!(app.cell_to_pixel(41, 11), Some((607, 420)));

    app.on_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 2,
        row: 2,
        modifiers: KeyModifiers::NONE,
    });
    assert!(!app.game.is_active());

    app.on_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 41,
        row: 11,
        modifiers: KeyModifiers::NONE,
    });
    assert!(app.game.is_active());
    assert_eq!(app.game.ship().rect().x, 570);
}
