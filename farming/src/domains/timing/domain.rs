use chrono::NaiveDate;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// In-game clock, counted in game seconds since the start date.
pub struct TimingDomain {
    pub game_seconds_per_real_second: f32,
    pub speed: f32,
    pub start_date: NaiveDate,
    pub seconds: f64,
}

impl Default for TimingDomain {
    fn default() -> Self {
        Self::new(60.0, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default())
    }
}

impl TimingDomain {
    pub fn new(game_seconds_per_real_second: f32, start_date: NaiveDate) -> Self {
        Self {
            game_seconds_per_real_second,
            speed: 1.0,
            start_date,
            seconds: 0.0,
        }
    }
}

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum Timing {
    TimeUpdated { seconds: i64, day: i64 },
}
