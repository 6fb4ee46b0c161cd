use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// How long a directional key counts as held after its last repeat, on
/// terminals that never report releases.
pub const HOLD_WINDOW: Duration = Duration::from_millis(200);

/// How long a fresh press counts as held before the first autorepeat.
/// Longer than the usual initial repeat delay (500 ms GNOME, 660 ms X11).
pub const FIRST_REPEAT_GRACE: Duration = Duration::from_millis(700);

/// What the player asked for, independent of the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveRight(bool),
    MoveLeft(bool),
    Fire,
    Start,
    Quit,
    Click { column: u16, row: u16 },
}

#[derive(Clone, Copy, PartialEq)]
enum Direction {
    Right,
    Left,
}

fn direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        _ => None,
    }
}

fn movement(dir: Direction, held: bool) -> Command {
    match dir {
        Direction::Right => Command::MoveRight(held),
        Direction::Left => Command::MoveLeft(held),
    }
}

#[derive(Clone, Copy)]
struct Held {
    last: u64,
    /// Autorepeat has started, so the short window applies.
    repeating: bool,
}

fn ticks_for(window: Duration, tick_interval: Duration) -> u64 {
    let tick = tick_interval.as_millis().max(1);
    window.as_millis().div_ceil(tick) as u64
}

/// Turns key events into commands and keeps the two movement keys' state.
///
/// Terminals with keyboard enhancement send proper releases. Everywhere
/// else autorepeats arrive as plain presses, so any press of a key that is
/// already held counts as a repeat. A key is released once it has been
/// quiet for `grace_ticks` after the first press, or for `hold_ticks`
/// after a repeat, see [`KeyTracker::expire`].
pub struct KeyTracker {
    release_events: bool,
    hold_ticks: u64,
    grace_ticks: u64,
    right: Option<Held>,
    left: Option<Held>,
}

impl KeyTracker {
    pub fn new(release_events: bool, tick_interval: Duration) -> Self {
        Self {
            release_events,
            hold_ticks: ticks_for(HOLD_WINDOW, tick_interval),
            grace_ticks: ticks_for(FIRST_REPEAT_GRACE, tick_interval),
            right: None,
            left: None,
        }
    }

    pub fn hold_ticks(&self) -> u64 {
        self.hold_ticks
    }

    pub fn grace_ticks(&self) -> u64 {
        self.grace_ticks
    }

    fn slot(&mut self, dir: Direction) -> &mut Option<Held> {
        match dir {
            Direction::Right => &mut self.right,
            Direction::Left => &mut self.left,
        }
    }

    pub fn translate(&mut self, key: KeyEvent, tick: u64) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return (key.kind != KeyEventKind::Release).then_some(Command::Quit);
        }

        if let Some(dir) = direction(key.code) {
            return match key.kind {
                KeyEventKind::Release => {
                    *self.slot(dir) = None;
                    Some(movement(dir, false))
                }
                kind => {
                    let slot = self.slot(dir);
                    let repeating = kind == KeyEventKind::Repeat || slot.is_some();
                    *slot = Some(Held { last: tick, repeating });
                    Some(movement(dir, true))
                }
            };
        }

        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char(' ') => Some(Command::Fire),
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => Some(Command::Start),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }

    /// Emulated releases for keys that went quiet. A no-op when the
    /// terminal reports real releases.
    pub fn expire(&mut self, tick: u64) -> Vec<Command> {
        if self.release_events {
            return Vec::new();
        }
        let (hold, grace) = (self.hold_ticks, self.grace_ticks);
        let mut released = Vec::new();
        for dir in [Direction::Right, Direction::Left] {
            let slot = self.slot(dir);
            if let Some(held) = *slot {
                let window = if held.repeating { hold } else { grace };
                if tick.saturating_sub(held.last) > window {
                    *slot = None;
                    released.push(movement(dir, false));
                }
            }
        }
        released
    }
}
