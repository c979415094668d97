//! This module provides in-memory stand-ins for the collaborators of the views, so that they can be tested (or demoed) without a backend nor a browser

use std::collections::HashMap;
use std::error::Error;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::reservation::RawReservation;
use crate::traits::{ReservationSource, SessionStorage, UserInterface};

/// This describes how a mocked source behaves during a given test
///
/// So that a function fails _n_ times after _m_ initial successes, set `(m, n)`
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    /// If this is true, every action will be allowed
    pub is_suspended: bool,

    pub get_rack_reservations_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fetch will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            is_suspended: false,
            get_rack_reservations_behaviour: (0, n_fails),
        }
    }

    /// Suspend this mock behaviour until you call `resume`
    pub fn suspend(&mut self) {
        self.is_suspended = true;
    }
    /// Make this behaviour active again
    pub fn resume(&mut self) {
        self.is_suspended = false;
    }

    pub fn can_get_rack_reservations(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.get_rack_reservations_behaviour, "get_rack_reservations")
    }
}


/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), Box<dyn Error>> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 -= 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else if remaining_failures > 0 {
        value.1 -= 1;
        log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
        Err(format!("Mocked behaviour requires this {} to fail this time. ({:?})", descr, value).into())
    } else {
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    }
}


/// A [`ReservationSource`] that returns a fixed set of reservations
#[derive(Debug)]
pub struct MockReservationSource {
    reservations: Vec<RawReservation>,
    behaviour: Mutex<MockBehaviour>,
    n_calls: Mutex<u32>,
}

impl MockReservationSource {
    pub fn new(reservations: Vec<RawReservation>) -> Self {
        Self::with_behaviour(reservations, (0, 0))
    }

    /// See [`MockBehaviour`] for the meaning of `(successes, failures)`
    pub fn with_behaviour(reservations: Vec<RawReservation>, behaviour: (u32, u32)) -> Self {
        Self {
            reservations,
            behaviour: Mutex::new(MockBehaviour { get_rack_reservations_behaviour: behaviour, ..MockBehaviour::default() }),
            n_calls: Mutex::new(0),
        }
    }

    /// How many times the reservations have been requested
    pub fn n_calls(&self) -> u32 {
        *self.n_calls.lock().unwrap()
    }
}

#[async_trait]
impl ReservationSource for MockReservationSource {
    async fn get_rack_reservations(&self) -> Result<Vec<RawReservation>, Box<dyn Error>> {
        *self.n_calls.lock().unwrap() += 1;
        self.behaviour.lock().unwrap().can_get_rack_reservations()?;
        Ok(self.reservations.clone())
    }
}


/// A [`SessionStorage`] backed by a map
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStorage {
    items: HashMap<String, String>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item<K: ToString, V: ToString>(&mut self, key: K, value: V) {
        self.items.insert(key.to_string(), value.to_string());
    }

    pub fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }
}


/// A [`UserInterface`] that remembers what it has been asked to do
#[derive(Debug, Default)]
pub struct RecordingInterface {
    alerts: Mutex<Vec<String>>,
    navigations: Mutex<Vec<String>>,
}

impl RecordingInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }
}

impl UserInterface for RecordingInterface {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn navigate(&self, route: &str) {
        self.navigations.lock().unwrap().push(route.to_string());
    }
}
