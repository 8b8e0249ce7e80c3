use crate::timing::{Timing, TimingDomain, SECONDS_PER_DAY};

impl TimingDomain {
    pub fn update(&mut self, real_seconds: f32) -> Vec<Timing> {
        let delta = real_seconds * self.speed * self.game_seconds_per_real_second;
        self.seconds += delta as f64;
        self.time_updated()
    }

    pub fn advance_days(&mut self, days: u32) -> Vec<Timing> {
        self.seconds += (days as i64 * SECONDS_PER_DAY) as f64;
        self.time_updated()
    }

    pub fn set_seconds(&mut self, seconds: i64) -> Vec<Timing> {
        self.seconds = seconds as f64;
        self.time_updated()
    }

    fn time_updated(&self) -> Vec<Timing> {
        vec![Timing::TimeUpdated {
            seconds: self.now_seconds(),
            day: self.elapsed_days(),
        }]
    }
}
