use indexmap::IndexMap;

use crate::models::booking::Booking;
use crate::models::transport::Transport;
use crate::utils::error::{AppError, AppResult};

/// In-memory inventory of every transport known to the session, kept in seed
/// order and keyed by transport code.
pub struct TransportService {
    transports: IndexMap<String, Transport>,
}

impl TransportService {
    pub fn new(seed: Vec<Transport>) -> AppResult<Self> {
        let mut transports = IndexMap::with_capacity(seed.len());
        for transport in seed {
            if transports.contains_key(&transport.code) {
                return Err(AppError::Conflict(format!(
                    "Transport {} is listed twice",
                    transport.code
                )));
            }
            transports.insert(transport.code.clone(), transport);
        }
        Ok(TransportService { transports })
    }

    pub fn all(&self) -> impl Iterator<Item = &Transport> {
        self.transports.values()
    }

    pub fn len(&self) -> usize {
        self.transports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transports.is_empty()
    }

    // Search transports by exact departure and destination
    pub fn search_transports(&self, departure: &str, destination: &str) -> Vec<&Transport> {
        let matches: Vec<&Transport> = self
            .transports
            .values()
            .filter(|t| t.serves(departure, destination))
            .collect();
        tracing::debug!(departure, destination, found = matches.len(), "searched transports");
        matches
    }

    pub fn get(&self, code: &str) -> Option<&Transport> {
        self.transports.get(code)
    }

    // Transport a booking was made on
    pub fn get_booked(&self, booking: &Booking) -> AppResult<&Transport> {
        self.get(&booking.transport_code).ok_or_else(|| {
            AppError::NotFound(format!("Transport {} not found", booking.transport_code))
        })
    }

    pub fn get_mut(&mut self, code: &str) -> AppResult<&mut Transport> {
        self.transports
            .get_mut(code)
            .ok_or_else(|| AppError::NotFound(format!("Transport {} not found", code)))
    }
}
