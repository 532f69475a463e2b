use std::fmt;

use strum::{Display, IntoStaticStr};

use crate::utils::error::{AppError, AppResult};

// Buses are always sold under the national operator's name
pub const BUS_OPERATOR: &str = "Air Uganda";

// Variant specific data of a transport
#[derive(Debug, Clone, PartialEq, Eq, Display, IntoStaticStr)]
pub enum TransportKind {
    Flight { gate: String, airport: String },
    Bus { route: String },
}

/// A bookable route instance with a finite seat pool.
///
/// `code` is the flight or bus number and identifies the transport within a
/// session. Seats are the only field that changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transport {
    pub airline: String,
    pub code: String,
    pub departure: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub kind: TransportKind,
    seats: u32,
}

impl Transport {
    #[allow(clippy::too_many_arguments)]
    pub fn flight(
        airline: impl Into<String>,
        code: impl Into<String>,
        departure: impl Into<String>,
        destination: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        seats: u32,
        gate: impl Into<String>,
        airport: impl Into<String>,
    ) -> Self {
        Transport {
            airline: airline.into(),
            code: code.into(),
            departure: departure.into(),
            destination: destination.into(),
            date: date.into(),
            time: time.into(),
            kind: TransportKind::Flight {
                gate: gate.into(),
                airport: airport.into(),
            },
            seats,
        }
    }

    pub fn bus(
        code: impl Into<String>,
        departure: impl Into<String>,
        destination: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        seats: u32,
        route: impl Into<String>,
    ) -> Self {
        Transport {
            airline: BUS_OPERATOR.to_string(),
            code: code.into(),
            departure: departure.into(),
            destination: destination.into(),
            date: date.into(),
            time: time.into(),
            kind: TransportKind::Bus {
                route: route.into(),
            },
            seats,
        }
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    pub fn has_seats(&self) -> bool {
        self.seats > 0
    }

    /// Assign a new seat count. Negative counts are rejected and the current
    /// value is kept.
    pub fn set_seats(&mut self, value: i64) -> AppResult<()> {
        if value < 0 {
            tracing::warn!(code = %self.code, value, "Seats cannot be negative.");
            return Err(AppError::ValidationError("Seats cannot be negative.".into()));
        }
        self.seats = u32::try_from(value)
            .map_err(|_| AppError::ValidationError(format!("Seat count {} is too large", value)))?;
        Ok(())
    }

    // Take one seat out of the pool, false when the pool is already empty
    pub(crate) fn take_seat(&mut self) -> bool {
        match self.seats.checked_sub(1) {
            Some(left) => {
                self.seats = left;
                true
            }
            None => false,
        }
    }

    pub fn serves(&self, departure: &str, destination: &str) -> bool {
        self.departure == departure && self.destination == destination
    }

    pub fn render_details(&self) -> String {
        let head = format!(
            "{} {} - {} to {} on {} at {} - Seats available: {}",
            self.kind, self.code, self.departure, self.destination, self.date, self.time, self.seats
        );
        match &self.kind {
            TransportKind::Flight { gate, airport } => format!("{} - Gate: {}, {}", head, gate, airport),
            TransportKind::Bus { route } => format!("{} - Route: {}", head, route),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {} to {} on {} at {} - Seats available: {}",
            self.code, self.departure, self.destination, self.date, self.time, self.seats
        )
    }
}
