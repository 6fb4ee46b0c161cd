use crate::geometry::Rect;
use crate::settings::Settings;
use crate::sprites::{Alien, Sprite};

/// Spawn positions for a full wave, row by row.
///
/// One alien width of margin on each side and an alien-sized gap between
/// neighbours; vertically the ship's height plus a buffer of alien rows is
/// kept clear at the bottom.
pub fn layout_fleet(
    screen_w: i32,
    screen_h: i32,
    ship_h: i32,
    alien_w: i32,
    alien_h: i32,
) -> Vec<(i32, i32)> {
    if alien_w <= 0 || alien_h <= 0 {
        return Vec::new();
    }

    let available_x = screen_w - 2 * alien_w;
    let columns = (available_x / (2 * alien_w)).max(0);
    let available_y = screen_h - 3 * alien_h - ship_h;
    let rows = (available_y / (2 * alien_h)).max(0);
    if available_x < 0 || available_y < 0 {
        return Vec::new();
    }

    let mut positions = Vec::with_capacity((rows * columns) as usize);
    for row in 0..rows {
        for col in 0..columns {
            positions.push((alien_w + 2 * alien_w * col, alien_h + 2 * alien_h * row));
        }
    }
    positions
}

/// The live wave of aliens. Direction is shared through `Settings`.
#[derive(Clone, Debug)]
pub struct Fleet {
    aliens: Vec<Alien>,
    alien_width: i32,
    alien_height: i32,
}

impl Fleet {
    pub fn new(alien_width: i32, alien_height: i32) -> Self {
        Self {
            aliens: Vec::new(),
            alien_width,
            alien_height,
        }
    }

    /// Replace whatever is left with a freshly laid out wave.
    pub fn spawn(&mut self, settings: &Settings, ship_height: i32) {
        self.aliens = layout_fleet(
            settings.screen_width,
            settings.screen_height,
            ship_height,
            self.alien_width,
            self.alien_height,
        )
        .into_iter()
        .map(|(x, y)| Alien::new(x, y, self.alien_width, self.alien_height))
        .collect();
    }

    /// Drop the whole fleet and reverse once if any member touches an edge.
    pub fn check_edges(&mut self, settings: &mut Settings) -> bool {
        if !self.aliens.iter().any(|a| a.at_edge(settings)) {
            return false;
        }
        for alien in &mut self.aliens {
            alien.drop_by(settings.fleet_drop_speed);
        }
        settings.fleet_direction = -settings.fleet_direction;
        true
    }

    pub fn update(&mut self, settings: &Settings) {
        for alien in &mut self.aliens {
            alien.update(settings);
        }
    }

    pub fn reached_bottom(&self, settings: &Settings) -> bool {
        self.aliens
            .iter()
            .any(|a| a.rect().bottom() >= settings.screen_height)
    }

    pub fn collides_with(&self, rect: &Rect) -> bool {
        self.aliens.iter().any(|a| a.rect().colliderect(rect))
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    /// Swap in the survivors of a collision pass.
    pub(crate) fn retain_survivors(&mut self, survivors: Vec<Alien>) {
        self.aliens = survivors;
    }

    pub(crate) fn take_aliens(&mut self) -> Vec<Alien> {
        std::mem::take(&mut self.aliens)
    }

    /// Test and demo hook: place an arbitrary set of aliens.
    pub fn set_aliens(&mut self, aliens: Vec<Alien>) {
        self.aliens = aliens;
    }

    pub fn clear(&mut self) {
        self.aliens.clear();
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }
}
