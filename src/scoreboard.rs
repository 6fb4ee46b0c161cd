use num_format::{Locale, ToFormattedString};

use crate::stats::GameStats;

pub const TEXT_COLOR: (u8, u8, u8) = (30, 30, 30);

/// Round to the nearest ten, ties going to the even ten.
pub fn round_score(score: u64) -> u64 {
    let tens = score / 10;
    let rem = score % 10;
    let tens = match rem {
        0..=4 => tens,
        5 if tens % 2 == 0 => tens,
        _ => tens + 1,
    };
    tens.saturating_mul(10)
}

pub fn format_score(score: u64) -> String {
    round_score(score).to_formatted_string(&Locale::en)
}

/// The HUD text, prepared once per frame from the stats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: String,
    pub high_score: String,
    pub level: String,
    pub ships_left: u32,
}

impl Scoreboard {
    pub fn prepare(stats: &GameStats) -> Self {
        Self {
            score: format_score(stats.score),
            high_score: format_score(stats.high_score),
            level: stats.level.to_string(),
            ships_left: stats.ships_left,
        }
    }
}
