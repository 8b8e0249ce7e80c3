use chrono::{Days, NaiveDate};

use crate::timing::{TimingDomain, SECONDS_PER_DAY};

impl TimingDomain {
    #[inline]
    pub fn now_seconds(&self) -> i64 {
        self.seconds.floor() as i64
    }

    pub fn elapsed_days(&self) -> i64 {
        self.now_seconds().div_euclid(SECONDS_PER_DAY)
    }

    pub fn today(&self) -> NaiveDate {
        let days = self.elapsed_days().max(0) as u64;
        self.start_date
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX)
    }
}
