use std::time::Duration;

/// Every tunable value of the game in one place.
///
/// The static part never changes after construction. The dynamic part
/// (speeds, fleet direction, point value) is reset at the start of every
/// session and scaled up each time a wave is cleared.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    // Screen
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: (u8, u8, u8),

    // Ship
    pub ship_limit: u32,

    // Bullets
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: (u8, u8, u8),
    pub bullets_allowed: usize,

    // Fleet
    pub fleet_drop_speed: i32,

    // Progression
    pub speedup_scale: f64,
    pub score_scale: f64,

    // Timing
    pub tick_interval: Duration,
    pub hit_pause: Duration,

    // Dynamic
    pub ship_speed: f64,
    pub bullet_speed: f64,
    pub alien_speed: f64,
    /// 1.0 = right, -1.0 = left
    pub fleet_direction: f64,
    pub alien_points: u64,
}

impl Settings {
    pub fn new() -> Self {
        let mut s = Self {
            screen_width: 1200,
            screen_height: 800,
            bg_color: (230, 230, 230),
            ship_limit: 3,
            bullet_width: 3,
            bullet_height: 15,
            bullet_color: (60, 60, 60),
            bullets_allowed: 3,
            fleet_drop_speed: 10,
            speedup_scale: 1.1,
            score_scale: 1.5,
            tick_interval: Duration::from_millis(16),
            hit_pause: Duration::from_millis(500),
            ship_speed: 0.0,
            bullet_speed: 0.0,
            alien_speed: 0.0,
            fleet_direction: 1.0,
            alien_points: 0,
        };
        s.reset_dynamic();
        s
    }

    /// Put the values that change during play back to their session-start constants.
    pub fn reset_dynamic(&mut self) {
        self.ship_speed = 1.5;
        self.bullet_speed = 3.0;
        self.alien_speed = 1.0;
        self.fleet_direction = 1.0;
        self.alien_points = 50;
    }

    /// Speed everything up and raise the value of each alien. Unbounded.
    pub fn advance_difficulty(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f64 * self.score_scale) as u64;
    }

    /// Number of ticks the hit pause lasts, rounded up.
    pub fn hit_pause_ticks(&self) -> u32 {
        let tick = self.tick_interval.as_millis().max(1);
        let pause = self.hit_pause.as_millis();
        pause.div_ceil(tick) as u32
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
