//! The three moving entities: the player's ship, its bullets and the aliens.
//!
//! Each keeps an exact `f64` coordinate on the axis it moves along so that
//! sub-pixel speeds accumulate, and snaps its integer rect to the floored
//! value after every update.

use crate::geometry::Rect;
use crate::settings::Settings;

/// Shared per-tick contract of everything that moves.
pub trait Sprite {
    fn update(&mut self, settings: &Settings);
    fn rect(&self) -> Rect;
}

// ── Ship ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Ship {
    rect: Rect,
    x: f64,
    screen: Rect,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    pub fn new(settings: &Settings, width: i32, height: i32) -> Self {
        let mut ship = Self {
            rect: Rect::new(0, 0, width, height),
            x: 0.0,
            screen: Rect::new(0, 0, settings.screen_width, settings.screen_height),
            moving_right: false,
            moving_left: false,
        };
        ship.center_ship();
        ship
    }

    /// Back to the bottom centre of the screen.
    pub fn center_ship(&mut self) {
        self.rect.set_midbottom(self.screen.midbottom());
        self.x = self.rect.x as f64;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    fn max_x(&self) -> f64 {
        (self.screen.right() - self.rect.width).max(0) as f64
    }
}

impl Sprite for Ship {
    fn update(&mut self, settings: &Settings) {
        // Opposite keys held together cancel out.
        if self.moving_right != self.moving_left {
            if self.moving_right && self.rect.right() < self.screen.right() {
                self.x += settings.ship_speed;
            }
            if self.moving_left && self.rect.left() > 0 {
                self.x -= settings.ship_speed;
            }
        }
        self.x = self.x.clamp(0.0, self.max_x());
        self.rect.x = self.x.floor() as i32;
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Bullet ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    rect: Rect,
    y: f64,
}

impl Bullet {
    /// A bullet emerging from the top centre of the ship.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        Self::with_midtop(settings, ship.rect().midtop())
    }

    pub fn with_midtop(settings: &Settings, midtop: (i32, i32)) -> Self {
        let mut rect = Rect::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_midtop(midtop);
        Self { rect, y: rect.y as f64 }
    }

    /// Fully past the top of the screen. Removal is up to the caller.
    pub fn is_expired(&self) -> bool {
        self.rect.bottom() <= 0
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Sprite for Bullet {
    fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
        self.rect.y = self.y.floor() as i32;
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Alien ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Alien {
    rect: Rect,
    x: f64,
}

impl Alien {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            x: x as f64,
        }
    }

    pub fn at_edge(&self, settings: &Settings) -> bool {
        self.rect.right() >= settings.screen_width || self.rect.left() <= 0
    }

    pub(crate) fn drop_by(&mut self, dy: i32) {
        self.rect.y += dy;
    }

    pub fn x(&self) -> f64 {
        self.x
    }
}

impl Sprite for Alien {
    fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction;
        self.rect.x = self.x.floor() as i32;
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}
