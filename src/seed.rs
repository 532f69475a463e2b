use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::models::transport::Transport;
use crate::utils::error::{AppError, AppResult};

const ENTEBBE: &str = "Entebbe International Airport";

// The inventory shipped with the demo
pub fn default_transports() -> Vec<Transport> {
    vec![
        Transport::flight("Air Uganda", "UG001", "Kampala", "Nairobi", "2024-11-28", "6:00am", 100, "Gate A", ENTEBBE),
        Transport::flight("Air Uganda", "UG002", "Kampala", "London", "2024-11-28", "8:00am", 50, "Gate A", ENTEBBE),
        Transport::bus("BUS001", "Kampala", "Jinja", "2024-11-29", "10:00am", 60, "Kampala-Jinja Road"),
        Transport::flight("Air Uganda", "UG003", "Kampala", "Johannesburg", "2024-11-28", "12:00pm", 70, "Gate B", ENTEBBE),
    ]
}

// One entry of a seed file, e.g.
// {"kind": "bus", "code": "BUS002", "departure": "Kampala", ..., "seats": 40, "route": "Masaka Road"}
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum TransportSeed {
    Flight {
        airline: String,
        code: String,
        departure: String,
        destination: String,
        date: String,
        time: String,
        seats: i64,
        gate: String,
        airport: String,
    },
    Bus {
        code: String,
        departure: String,
        destination: String,
        date: String,
        time: String,
        seats: i64,
        route: String,
    },
}

impl TransportSeed {
    fn into_transport(self) -> AppResult<Transport> {
        let (mut transport, seats) = match self {
            TransportSeed::Flight { airline, code, departure, destination, date, time, seats, gate, airport } => (
                Transport::flight(airline, code, departure, destination, date, time, 0, gate, airport),
                seats,
            ),
            TransportSeed::Bus { code, departure, destination, date, time, seats, route } => (
                Transport::bus(code, departure, destination, date, time, 0, route),
                seats,
            ),
        };
        transport
            .set_seats(seats)
            .map_err(|e| AppError::ConfigError(format!("{}: {}", transport.code, e)))?;
        Ok(transport)
    }
}

pub fn parse_transports(json: &str) -> AppResult<Vec<Transport>> {
    let seeds: Vec<TransportSeed> = serde_json::from_str(json)?;
    seeds.into_iter().map(TransportSeed::into_transport).collect()
}

pub fn load_transports(path: &Path) -> AppResult<Vec<Transport>> {
    let json = fs::read_to_string(path)
        .map_err(|e| AppError::ConfigError(format!("cannot read {}: {}", path.display(), e)))?;
    let transports = parse_transports(&json)?;
    tracing::info!(path = %path.display(), count = transports.len(), "loaded seed inventory");
    Ok(transports)
}
