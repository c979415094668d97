//! Reservations, as sent by the backend and as displayed on the rack

use std::error::Error;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::client::HttpClient;
use crate::traits::ReservationSource;
use crate::utils::parse_datetime;

/// Path (relative to the API base URL) of the endpoint that lists the rack reservations
pub const RACK_PATH: &str = "reservation/rack";


/// A reservation, as returned by the backend.
///
/// The backend may send more fields than these, they are not used here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawReservation {
    pub title: String,
    pub start: String,
    pub end: String,
}

impl RawReservation {
    pub fn new<S: ToString, T: ToString, U: ToString>(title: S, start: T, end: U) -> Self {
        Self { title: title.to_string(), start: start.to_string(), end: end.to_string() }
    }
}


/// A reservation, ready to be displayed on the rack
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReservationEvent {
    title: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl ReservationEvent {
    pub fn new(title: String, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { title, start, end }
    }

    /// The customer name (or the label the backend chose, e.g. a RUT when the customer is unknown)
    pub fn title(&self) -> &str { &self.title }
    pub fn start(&self) -> NaiveDateTime { self.start }
    pub fn end(&self) -> NaiveDateTime { self.end }
}

impl std::convert::TryFrom<&RawReservation> for ReservationEvent {
    type Error = Box<dyn Error>;

    fn try_from(raw: &RawReservation) -> Result<Self, Self::Error> {
        let start = parse_datetime(&raw.start)
            .map_err(|err| format!("Invalid start {:?} for {}: {}", raw.start, raw.title, err))?;
        let end = parse_datetime(&raw.end)
            .map_err(|err| format!("Invalid end {:?} for {}: {}", raw.end, raw.title, err))?;
        Ok(Self::new(raw.title.clone(), start, end))
    }
}


/// Fetches reservations from the backend
#[derive(Clone, Debug)]
pub struct ReservationService {
    client: HttpClient,
    path: String,
}

impl ReservationService {
    pub fn new(client: HttpClient) -> Self {
        Self::with_path(client, RACK_PATH)
    }

    /// Use another endpoint than [`RACK_PATH`]
    pub fn with_path<S: ToString>(client: HttpClient, path: S) -> Self {
        Self { client, path: path.to_string() }
    }

    pub fn client(&self) -> &HttpClient { &self.client }
}

#[async_trait]
impl ReservationSource for ReservationService {
    async fn get_rack_reservations(&self) -> Result<Vec<RawReservation>, Box<dyn Error>> {
        let values: Vec<serde_json::Value> = self.client.get_json(&self.path).await?;
        let reservations = decode_reservations(values);
        log::info!("Fetched {} reservations", reservations.len());
        Ok(reservations)
    }
}

/// Decode every record on its own, so that an invalid one does not hide the others
pub fn decode_reservations(values: Vec<serde_json::Value>) -> Vec<RawReservation> {
    let mut reservations = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value::<RawReservation>(value.clone()) {
            Err(err) => {
                log::warn!("Invalid reservation {} ({}). Ignoring it", value, err);
                continue;
            },
            Ok(reservation) => reservations.push(reservation),
        }
    }
    reservations
}
