//! Wall-clock implementation of `Clock`

use chrono::{Local, NaiveDate};

use crate::traits::Clock;

/// Reads today's date from the local time zone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
