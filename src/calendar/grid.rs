//! Positioning of events on a week grid

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::calendar::CalendarSettings;
use crate::reservation::ReservationEvent;

/// Number of days displayed by the grid
pub const DAYS_PER_WEEK: usize = 7;


/// An event, as positioned on a [`WeekGrid`].
///
/// Events that span several days are placed once per day.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedEvent {
    pub event: ReservationEvent,
    /// Index of the day in the week (0 is Monday)
    pub day: usize,
    /// Index of the first slot this event covers
    pub first_slot: u32,
    /// How many slots this event covers (at least 1)
    pub slot_span: u32,
}


/// A Monday-to-Sunday week, whose days are split into slots between two hours
#[derive(Clone, Debug, PartialEq)]
pub struct WeekGrid {
    first_day: NaiveDate,
    first_hour: u32,
    last_hour: u32,
    step_minutes: u32,
}

impl WeekGrid {
    /// The grid of the week that contains `date`
    pub fn new(date: NaiveDate, settings: &CalendarSettings) -> Self {
        let first_day = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        Self {
            first_day,
            first_hour: settings.first_hour,
            last_hour: settings.last_hour,
            step_minutes: settings.step_minutes,
        }
    }

    pub fn first_day(&self) -> NaiveDate { self.first_day }
    pub fn last_day(&self) -> NaiveDate { self.day(DAYS_PER_WEEK - 1) }

    pub fn day(&self, index: usize) -> NaiveDate {
        self.first_day + Duration::days(index as i64)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..DAYS_PER_WEEK).map(move |index| self.day(index))
    }

    pub fn slot_count(&self) -> u32 {
        (self.last_hour - self.first_hour) * 60 / self.step_minutes
    }

    /// Time at which a slot starts. `slot_start(slot_count())` is the end of the visible part of the day
    pub fn slot_start(&self, slot: u32) -> NaiveTime {
        NaiveTime::MIN + Duration::minutes((self.first_hour * 60 + slot * self.step_minutes) as i64)
    }

    /// The visible part of a day
    pub fn visible_window(&self, index: usize) -> (NaiveDateTime, NaiveDateTime) {
        let midnight = self.day(index).and_time(NaiveTime::MIN);
        (midnight + Duration::hours(self.first_hour as i64),
         midnight + Duration::hours(self.last_hour as i64))
    }

    /// Position an event on this grid.
    ///
    /// The event is clipped to the visible part of every day it overlaps. It is not placed at all if it does not overlap any of them.
    pub fn place(&self, event: &ReservationEvent) -> Vec<PlacedEvent> {
        let step = self.step_minutes as i64;
        let mut placed = Vec::new();

        for day in 0..DAYS_PER_WEEK {
            let (window_start, window_end) = self.visible_window(day);
            if event.end() <= window_start || event.start() >= window_end {
                continue;
            }

            let start = event.start().max(window_start);
            let end = event.end().min(window_end);

            let first_slot = (start - window_start).num_minutes() / step;
            let end_minutes = (end - window_start).num_minutes();
            let last_slot = (end_minutes + step - 1) / step;

            placed.push(PlacedEvent {
                event: event.clone(),
                day,
                first_slot: first_slot as u32,
                slot_span: (last_slot - first_slot).max(1) as u32,
            });
        }

        placed
    }
}
