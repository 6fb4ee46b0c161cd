//! The game/session state machine.
//!
//! Two phases, tracked by `GameStats::game_active`: inactive (title screen,
//! only start and quit do anything) and active (the simulation runs). One
//! call to [`Game::tick`] advances the active simulation by one frame.

use tracing::{debug, info};

use crate::assets::Image;
use crate::button::Button;
use crate::fleet::Fleet;
use crate::settings::Settings;
use crate::sprites::{Alien, Bullet, Ship, Sprite};
use crate::stats::GameStats;

pub struct Game {
    settings: Settings,
    stats: GameStats,
    ship: Ship,
    bullets: Vec<Bullet>,
    fleet: Fleet,
    play_button: Button,
    pause_ticks: u32,
    ship_image: Image,
    alien_image: Image,
}

impl Game {
    pub fn new(settings: Settings, ship_image: Image, alien_image: Image) -> Self {
        let stats = GameStats::new(&settings);
        let ship = Ship::new(&settings, ship_image.width, ship_image.height);
        let mut fleet = Fleet::new(alien_image.width, alien_image.height);
        // Attract-mode wave behind the Play button.
        fleet.spawn(&settings, ship_image.height);
        let play_button = Button::new(&settings, "Play");
        Self {
            settings,
            stats,
            ship,
            bullets: Vec::new(),
            fleet,
            play_button,
            pause_ticks: 0,
            ship_image,
            alien_image,
        }
    }

    // ── Commands ───────────────────────────────────────────────────────

    /// Begin a new session. Ignored while one is already running.
    pub fn start(&mut self) -> bool {
        if self.stats.game_active {
            return false;
        }
        self.settings.reset_dynamic();
        self.stats.reset();
        self.stats.game_active = true;

        self.bullets.clear();
        self.fleet.clear();
        self.fleet.spawn(&self.settings, self.ship.rect().height);
        self.ship.center_ship();
        self.ship.moving_right = false;
        self.ship.moving_left = false;
        self.pause_ticks = 0;

        info!(aliens = self.fleet.len(), "game started");
        true
    }

    /// A pointer activation at pixel coordinates.
    pub fn click(&mut self, x: i32, y: i32) -> bool {
        if !self.stats.game_active && self.play_button.contains(x, y) {
            return self.start();
        }
        false
    }

    pub fn set_moving_right(&mut self, moving: bool) {
        self.ship.moving_right = moving;
    }

    pub fn set_moving_left(&mut self, moving: bool) {
        self.ship.moving_left = moving;
    }

    pub fn fire(&mut self) -> bool {
        if !self.stats.game_active || self.is_paused() {
            return false;
        }
        if self.bullets.len() >= self.settings.bullets_allowed {
            return false;
        }
        self.bullets.push(Bullet::new(&self.settings, &self.ship));
        debug!(in_flight = self.bullets.len(), "bullet fired");
        true
    }

    // ── Simulation ─────────────────────────────────────────────────────

    pub fn tick(&mut self) {
        if !self.stats.game_active {
            return;
        }
        if self.pause_ticks > 0 {
            self.pause_ticks -= 1;
            return;
        }

        self.ship.update(&self.settings);
        self.update_bullets();
        self.check_bullet_alien_collisions();
        if self.fleet.is_empty() {
            self.start_new_level();
        }
        self.update_aliens();
        self.stats.promote_high_score();
    }

    fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update(&self.settings);
        }
        self.bullets.retain(|b| !b.is_expired());
    }

    /// Every overlapping pair goes; one bullet may take out several aliens.
    fn check_bullet_alien_collisions(&mut self) {
        let aliens = self.fleet.take_aliens();
        let mut bullet_hit = vec![false; self.bullets.len()];
        let mut survivors = Vec::with_capacity(aliens.len());
        let points = self.settings.alien_points;
        let mut destroyed = 0u32;

        for alien in aliens {
            let mut hit = false;
            for (i, bullet) in self.bullets.iter().enumerate() {
                if bullet.rect().colliderect(&alien.rect()) {
                    bullet_hit[i] = true;
                    hit = true;
                }
            }
            if hit {
                self.stats.record_hit(points);
                destroyed += 1;
            } else {
                survivors.push(alien);
            }
        }

        if destroyed > 0 {
            let mut hits = bullet_hit.into_iter();
            self.bullets.retain(|_| !hits.next().unwrap_or(false));
            debug!(destroyed, points, score = self.stats.score, "aliens destroyed");
        }
        self.fleet.retain_survivors(survivors);
    }

    fn start_new_level(&mut self) {
        self.bullets.clear();
        self.settings.advance_difficulty();
        self.stats.level += 1;
        self.fleet.spawn(&self.settings, self.ship.rect().height);
        info!(
            level = self.stats.level,
            alien_speed = self.settings.alien_speed,
            alien_points = self.settings.alien_points,
            "wave cleared"
        );
    }

    fn update_aliens(&mut self) {
        self.fleet.check_edges(&mut self.settings);
        self.fleet.update(&self.settings);

        let ship_rect = self.ship.rect();
        if self.fleet.collides_with(&ship_rect) || self.fleet.reached_bottom(&self.settings) {
            self.ship_hit();
        }
    }

    fn ship_hit(&mut self) {
        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);
        if self.stats.ships_left == 0 {
            self.stats.game_active = false;
            self.ship.moving_right = false;
            self.ship.moving_left = false;
            self.stats.promote_high_score();
            info!(score = self.stats.score, level = self.stats.level, "game over");
            return;
        }

        self.bullets.clear();
        self.fleet.clear();
        self.fleet.spawn(&self.settings, self.ship.rect().height);
        self.ship.center_ship();
        self.pause_ticks = self.settings.hit_pause_ticks();
        info!(ships_left = self.stats.ships_left, "ship hit");
    }

    // ── Queries ────────────────────────────────────────────────────────

    pub fn is_active(&self) -> bool {
        self.stats.game_active
    }

    pub fn is_paused(&self) -> bool {
        self.pause_ticks > 0
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn aliens(&self) -> &[Alien] {
        self.fleet.aliens()
    }

    pub fn play_button(&self) -> &Button {
        &self.play_button
    }

    pub fn ship_image(&self) -> &Image {
        &self.ship_image
    }

    pub fn alien_image(&self) -> &Image {
        &self.alien_image
    }

    // Scenario setup for tests and tooling.

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn stats_mut(&mut self) -> &mut GameStats {
        &mut self.stats
    }

    pub fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    pub fn bullets_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.bullets
    }
}
