use crate::settings::Settings;

/// Session statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    ship_limit: u32,
    pub ships_left: u32,
    pub score: u64,
    pub level: u32,
    /// Never reset within a run.
    pub high_score: u64,
    pub game_active: bool,
}

impl GameStats {
    /// Stats for a fresh run: title screen, no high score yet.
    pub fn new(settings: &Settings) -> Self {
        let mut stats = Self {
            ship_limit: settings.ship_limit,
            ships_left: 0,
            score: 0,
            level: 1,
            high_score: 0,
            game_active: false,
        };
        stats.reset();
        stats
    }

    pub fn reset(&mut self) {
        self.ships_left = self.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    pub fn record_hit(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Returns true when the high score moved.
    pub fn promote_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
