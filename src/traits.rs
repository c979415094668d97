use std::error::Error;

use async_trait::async_trait;

use crate::reservation::RawReservation;

/// Something that is able to provide the reservations to display on the rack
#[async_trait]
pub trait ReservationSource {
    /// Returns every reservation the backend considers relevant for the weekly rack.
    /// No date range is sent: deciding the returned window is up to the source.
    async fn get_rack_reservations(&self) -> Result<Vec<RawReservation>, Box<dyn Error>>;
}

/// A key/value store that holds the session of the logged-in user (e.g. the browser local storage)
pub trait SessionStorage {
    /// Returns the value stored for this key, if any
    fn get_item(&self, key: &str) -> Option<String>;
}

/// What the views need from the host they are displayed in
pub trait UserInterface {
    /// Show a blocking message to the user
    fn alert(&self, message: &str);
    /// Navigate to another route (e.g. `/login`)
    fn navigate(&self, route: &str);
}
