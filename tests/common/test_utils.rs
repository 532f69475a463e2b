#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Cursor;

use travel_booking::{
    config::AppConfig,
    console::session::Session,
    models::{transport::Transport, user::User},
    seed::default_transports,
    services::transport_service::TransportService,
    utils::{
        error::{AppError, AppResult},
        validation::Credentials,
    },
};

// Identity lines that pass every validation rule
pub const IDENTITY: &str = "Nakato Sarah\nsarah@example.ug\npassword123\n";

pub fn seeded_service() -> TransportService {
    TransportService::new(default_transports()).expect("built-in seed has unique codes")
}

pub fn test_credentials() -> Credentials {
    Credentials {
        name: "Nakato Sarah".to_string(),
        email: "sarah@example.ug".to_string(),
        password: "password123".to_string(),
    }
}

pub fn test_user() -> Result<User, AppError> {
    User::new(test_credentials())
}

pub fn small_bus(code: &str, seats: u32) -> Transport {
    Transport::bus(code, "Kampala", "Jinja", "2024-11-29", "10:00am", seats, "Kampala-Jinja Road")
}

/// Outcome of a scripted terminal session.
pub struct SessionRun {
    pub result: AppResult<User>,
    pub transcript: String,
    // seat count per transport code once the session ended
    pub seats: HashMap<String, u32>,
}

// Feed `script` as standard input to a session over `transport_service`
pub fn run_session_with(
    script: &str,
    transport_service: TransportService,
    config: &AppConfig,
) -> SessionRun {
    run_session_bytes(script.as_bytes().to_vec(), transport_service, config)
}

// Same as `run_session_with`, for input that is not valid UTF-8
pub fn run_session_bytes(
    script: Vec<u8>,
    transport_service: TransportService,
    config: &AppConfig,
) -> SessionRun {
    let mut session = Session::new(
        Cursor::new(script),
        Vec::new(),
        transport_service,
        config,
    );
    let result = session.run();
    let seats = session
        .transport_service()
        .all()
        .map(|t| (t.code.clone(), t.seats()))
        .collect();
    let transcript = String::from_utf8(session.into_output()).expect("transcript is utf-8");

    SessionRun {
        result,
        transcript,
        seats,
    }
}

pub fn run_session(script: &str) -> SessionRun {
    run_session_with(script, seeded_service(), &AppConfig::default())
}
