//! The rack: a week of reservations, colored by customer

use std::convert::TryFrom;
use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::calendar::{CalendarSettings, PlacedEvent, WeekGrid};
use crate::color::{ColorMap, CustomerColor};
use crate::reservation::{RawReservation, ReservationEvent};
use crate::traits::{ReservationSource, UserInterface};
use crate::utils::format_es_cl;

/// What the user is told when the reservations could not be fetched
pub const LOAD_ERROR_MESSAGE: &str = "Error al cargar el rack semanal";
/// Title of the page
pub const RACK_TITLE: &str = "Rack Semanal de Ocupación";


/// Whether the reservations have been fetched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing has been fetched yet
    Loading,
    /// Reservations have been fetched (there may be none)
    Loaded,
    /// The last fetch failed. Events from a previous fetch (if any) are still displayed
    Error,
}

/// Binds a fetch to the mount it was started in.
///
/// Outcomes of a fetch started before [`RackView::unmount`] are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}


/// How an event is drawn
#[derive(Clone, Debug, PartialEq)]
pub struct EventStyle {
    pub background_color: CustomerColor,
    pub color: &'static str,
    pub border_radius: &'static str,
    pub padding: &'static str,
    pub font_weight: u16,
    pub font_size: &'static str,
}

impl EventStyle {
    fn for_color(background_color: CustomerColor) -> Self {
        Self {
            background_color,
            color: "white",
            border_radius: "8px",
            padding: "4px",
            font_weight: 500,
            font_size: "0.9rem",
        }
    }
}

impl Display for EventStyle {
    /// Inline CSS
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "background-color: {}; color: {}; border-radius: {}; padding: {}; font-weight: {}; font-size: {}",
            self.background_color, self.color, self.border_radius, self.padding, self.font_weight, self.font_size)
    }
}


/// The detail panel of the selected reservation
#[derive(Clone, Debug, PartialEq)]
pub struct EventDetails {
    pub customer: String,
    /// Localized start
    pub start: String,
    /// Localized end
    pub end: String,
}

impl EventDetails {
    pub const HEADING: &'static str = "Detalles de la Reserva";
}

impl Display for EventDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", Self::HEADING)?;
        writeln!(f, "Cliente: {}", self.customer)?;
        writeln!(f, "Inicio: {}", self.start)?;
        write!(f, "Término: {}", self.end)
    }
}


/// The state of the weekly occupancy view
#[derive(Debug)]
pub struct RackView {
    settings: CalendarSettings,
    state: LoadState,
    events: Vec<ReservationEvent>,
    selected: Option<ReservationEvent>,
    colors: ColorMap,
    generation: u64,
}

impl RackView {
    pub fn new() -> Self {
        Self::with_settings(CalendarSettings::rack())
    }

    pub fn with_settings(settings: CalendarSettings) -> Self {
        Self {
            settings,
            state: LoadState::Loading,
            events: Vec::new(),
            selected: None,
            colors: ColorMap::new(),
            generation: 0,
        }
    }

    pub fn settings(&self) -> &CalendarSettings { &self.settings }
    pub fn state(&self) -> LoadState { self.state }
    pub fn events(&self) -> &[ReservationEvent] { &self.events }
    pub fn selected(&self) -> Option<&ReservationEvent> { self.selected.as_ref() }
    pub fn colors(&self) -> &ColorMap { &self.colors }

    /// Fetch the reservations and display them.
    ///
    /// In case of failure, the user is alerted once and the events that were already displayed are kept.
    pub async fn load_week<S, U>(&mut self, source: &S, ui: &U)
    where
        S: ReservationSource + ?Sized,
        U: UserInterface + ?Sized,
    {
        let ticket = self.begin_load();
        let result = source.get_rack_reservations().await;
        self.apply_load(ticket, result, ui);
    }

    /// Start a fetch. Its outcome must be given back to [`Self::apply_load`] along with this ticket
    pub fn begin_load(&self) -> LoadTicket {
        LoadTicket { generation: self.generation }
    }

    /// Whether the outcome of this fetch would still be applied
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply the outcome of a fetch.
    ///
    /// This returns `false` (and changes nothing) in case the view has been unmounted since the fetch started.
    pub fn apply_load<U>(&mut self, ticket: LoadTicket, result: Result<Vec<RawReservation>, Box<dyn Error>>, ui: &U) -> bool
    where
        U: UserInterface + ?Sized,
    {
        if self.is_current(&ticket) == false {
            log::debug!("Ignoring a fetch started before the rack was unmounted");
            return false;
        }

        match result {
            Err(err) => {
                log::error!("Unable to fetch the weekly rack: {}", err);
                self.state = LoadState::Error;
                ui.alert(LOAD_ERROR_MESSAGE);
            },
            Ok(reservations) => {
                let mut events = Vec::with_capacity(reservations.len());
                for raw in &reservations {
                    match ReservationEvent::try_from(raw) {
                        Err(err) => {
                            log::warn!("{}. Ignoring this reservation", err);
                            continue;
                        },
                        Ok(event) => events.push(event),
                    }
                }
                log::debug!("Rack now has {} events", events.len());
                self.events = events;
                self.state = LoadState::Loaded;
            },
        }
        true
    }

    /// Detach this view: fetches that are still in flight will not be applied
    pub fn unmount(&mut self) {
        self.generation += 1;
    }

    /// Select an event, replacing the previous selection
    pub fn select_event(&mut self, event: ReservationEvent) {
        log::debug!("Selected reservation of {}", event.title());
        self.selected = Some(event);
    }

    /// The detail panel of the selected event, if any
    pub fn selected_details(&self) -> Option<EventDetails> {
        self.selected.as_ref().map(|event| EventDetails {
            customer: event.title().to_string(),
            start: format_es_cl(&event.start()),
            end: format_es_cl(&event.end()),
        })
    }

    /// How an event is drawn. Its color depends on its title only
    pub fn event_style(&mut self, event: &ReservationEvent) -> EventStyle {
        EventStyle::for_color(self.colors.get_or_assign(event.title()))
    }

    /// The grid of the week that contains `date`
    pub fn grid(&self, date: NaiveDate) -> WeekGrid {
        WeekGrid::new(date, &self.settings)
    }

    /// Position every event on the week that contains `date`
    pub fn layout(&self, date: NaiveDate) -> Vec<PlacedEvent> {
        let grid = self.grid(date);
        self.events.iter()
            .flat_map(|event| grid.place(event))
            .collect()
    }

    pub fn empty_message(&self) -> &'static str {
        self.settings.messages.no_events_in_range
    }
}

impl Default for RackView {
    fn default() -> Self {
        Self::new()
    }
}
