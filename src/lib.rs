//! This crate is a client for the KartingRM reservation backend.
//!
//! It provides the weekly occupancy calendar of the track (the "rack") in the [`calendar`] module, and the profile of the logged-in customer in the [`profile`] module. \
//! Both are headless views: they hold the state and compute what should be displayed, while the host (a terminal, a test, a UI layer) draws it.
//!
//! Reservations are fetched from the backend by a [`ReservationService`](reservation::ReservationService), which uses an [`HttpClient`](client::HttpClient) built from a [`BackendConfig`](config::BackendConfig). \
//! Every collaborator of the views is a trait of the [`traits`] module, so that they can be mocked (see [`mock_behaviour`]).

pub mod traits;

pub mod config;
pub mod client;
pub mod reservation;
pub use reservation::{RawReservation, ReservationEvent};
pub mod color;
pub use color::{ColorMap, CustomerColor};
pub mod calendar;
pub use calendar::RackView;
pub mod profile;
pub use profile::{ProfileView, SessionUser};

pub mod mock_behaviour;
pub mod utils;
