use std::collections::VecDeque;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect as Area;
use tracing::debug;

use crate::event::Event;
use crate::game::Game;
use crate::input::{Command, KeyTracker};
use crate::ui::field::cell_centre;

pub struct App {
    pub should_quit: bool,
    pub game: Game,
    keys: KeyTracker,
    /// Commands held back while the game sits in its post-hit pause.
    deferred: VecDeque<Command>,
    tick: u64,
    /// Terminal area the play field was last drawn into.
    pub field_area: Area,
}

impl App {
    pub fn new(game: Game, release_events: bool) -> Self {
        let keys = KeyTracker::new(release_events, game.settings().tick_interval);
        Self {
            should_quit: false,
            game,
            keys,
            deferred: VecDeque::new(),
            tick: 0,
            field_area: Area::default(),
        }
    }

    pub fn on_tick(&mut self) {
        self.tick += 1;
        for cmd in self.keys.expire(self.tick) {
            self.dispatch(cmd);
        }
        self.game.tick();
        if !self.game.is_paused() {
            while let Some(cmd) = self.deferred.pop_front() {
                self.apply(cmd);
            }
        }
    }

    pub fn on_event(&mut self, event: Event) {
        match event {
            Event::Tick => self.on_tick(),
            Event::Key(key) => self.on_key(key),
            Event::Mouse(mouse) => self.on_mouse(mouse),
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if let Some(cmd) = self.keys.translate(key, self.tick) {
            self.dispatch(cmd);
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.dispatch(Command::Click {
                column: mouse.column,
                row: mouse.row,
            });
        }
    }

    pub fn dispatch(&mut self, cmd: Command) {
        // Quit is never deferred.
        if cmd == Command::Quit {
            self.should_quit = true;
            return;
        }
        if self.game.is_paused() {
            self.deferred.push_back(cmd);
            return;
        }
        self.apply(cmd);
    }

    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }

    fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::MoveRight(held) => self.game.set_moving_right(held),
            Command::MoveLeft(held) => self.game.set_moving_left(held),
            Command::Fire => {
                self.game.fire();
            }
            Command::Start => {
                self.game.start();
            }
            Command::Quit => self.should_quit = true,
            Command::Click { column, row } => {
                if let Some((x, y)) = self.cell_to_pixel(column, row) {
                    debug!(column, row, x, y, "click");
                    self.game.click(x, y);
                }
            }
        }
    }

    /// Centre of a terminal cell in game pixels, if the cell is on the field.
    pub fn cell_to_pixel(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        let area = self.field_area;
        if area.width == 0
            || area.height == 0
            || column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }
        let settings = self.game.settings();
        Some((
            cell_centre(column - area.x, area.width, settings.screen_width),
            cell_centre(row - area.y, area.height, settings.screen_height),
        ))
    }
}
