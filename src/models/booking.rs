use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::transport::Transport;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingId(String);

impl BookingId {
    pub fn generate() -> Self {
        BookingId(format!("BK-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One passenger on one transport.
///
/// The transport itself stays in the inventory; a booking only keeps its code.
#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub transport_code: String,
    pub passenger_name: String,
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(transport: &Transport, passenger_name: impl Into<String>) -> Self {
        Booking {
            booking_id: BookingId::generate(),
            transport_code: transport.code.clone(),
            passenger_name: passenger_name.into(),
            booked_at: Utc::now(),
        }
    }

    // Summary line, transport shown with its current seat count
    pub fn summary_line(&self, transport: &Transport) -> String {
        format!(
            "Booking ID: {}, Flight: {}, Passenger: {}",
            self.booking_id, transport, self.passenger_name
        )
    }
}
