//! The weekly occupancy calendar (a.k.a. the "rack")

pub mod grid;
pub mod rack;

pub use grid::{PlacedEvent, WeekGrid};
pub use rack::{EventDetails, EventStyle, LoadState, LoadTicket, RackView};

use std::error::Error;

use bitflags::bitflags;

bitflags! {
    /// The views a calendar is able to switch to
    pub struct CalendarViews: u8 {
        const MONTH = 1;
        const WEEK = 2;
        const WORK_WEEK = 4;
        const DAY = 8;
        const AGENDA = 16;
    }
}

/// Labels of the calendar toolbar
#[derive(Clone, Debug, PartialEq)]
pub struct Messages {
    pub week: &'static str,
    pub day: &'static str,
    pub month: &'static str,
    pub today: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub no_events_in_range: &'static str,
}

impl Messages {
    pub fn spanish() -> Self {
        Self {
            week: "Semana",
            day: "Día",
            month: "Mes",
            today: "Hoy",
            previous: "Anterior",
            next: "Siguiente",
            no_events_in_range: "Sin reservas en este rango",
        }
    }
}

/// How the rack is displayed.
///
/// Fields are only set through [`CalendarSettings::rack`] or the validating [`CalendarSettings::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarSettings {
    /// Views the user may switch to
    views: CalendarViews,
    default_view: CalendarViews,
    /// Duration of a slot, in minutes
    step_minutes: u32,
    /// Number of subdivisions of a slot
    timeslots: u32,
    /// First visible hour of every day
    first_hour: u32,
    /// Hour at which the visible part of every day ends
    last_hour: u32,
    culture: &'static str,
    messages: Messages,
}

impl CalendarSettings {
    /// A single week view, from 10:00 to 22:00 in 30-minute slots, in Spanish
    pub fn rack() -> Self {
        Self {
            views: CalendarViews::WEEK,
            default_view: CalendarViews::WEEK,
            step_minutes: 30,
            timeslots: 1,
            first_hour: 10,
            last_hour: 22,
            culture: "es",
            messages: Messages::spanish(),
        }
    }

    /// Like [`Self::rack`], with other visible hours and slot duration.
    ///
    /// The visible hours must be within a day, and the slot duration must be positive and not longer than them.
    pub fn new(first_hour: u32, last_hour: u32, step_minutes: u32) -> Result<Self, Box<dyn Error>> {
        if first_hour >= last_hour || last_hour > 24 {
            return Err(format!("Invalid visible hours {}:00-{}:00", first_hour, last_hour).into());
        }
        if step_minutes == 0 || step_minutes > (last_hour - first_hour) * 60 {
            return Err(format!("Invalid slot duration of {} minutes", step_minutes).into());
        }

        Ok(Self { first_hour, last_hour, step_minutes, ..Self::rack() })
    }

    pub fn views(&self) -> CalendarViews { self.views }
    pub fn default_view(&self) -> CalendarViews { self.default_view }
    pub fn step_minutes(&self) -> u32 { self.step_minutes }
    pub fn timeslots(&self) -> u32 { self.timeslots }
    pub fn first_hour(&self) -> u32 { self.first_hour }
    pub fn last_hour(&self) -> u32 { self.last_hour }
    pub fn culture(&self) -> &'static str { self.culture }
    pub fn messages(&self) -> &Messages { &self.messages }

    /// How many slots a day is split into
    pub fn slots_per_day(&self) -> u32 {
        (self.last_hour - self.first_hour) * 60 / self.step_minutes
    }
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self::rack()
    }
}
