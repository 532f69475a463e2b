use std::fmt;

use validator::Validate;

use crate::models::booking::Booking;
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::{is_valid_password, Credentials};

#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub email: String,
    password: String,
}

impl Person {
    pub fn password(&self) -> &str {
        &self.password
    }

    // Short passwords are rejected and the old one is kept
    pub fn set_password(&mut self, value: impl Into<String>) -> AppResult<()> {
        let value = value.into();
        if !is_valid_password(&value) {
            tracing::warn!(name = %self.name, "Password must be at least 8 characters.");
            return Err(AppError::ValidationError(
                "Password must be at least 8 characters.".into(),
            ));
        }
        self.password = value;
        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Email: {}", self.name, self.email)
    }
}

/// The person running the session, together with everything they booked.
#[derive(Debug, Clone)]
pub struct User {
    pub person: Person,
    bookings: Vec<Booking>,
}

impl User {
    pub fn new(credentials: Credentials) -> AppResult<Self> {
        credentials.validate()?;
        Ok(User {
            person: Person {
                name: credentials.name,
                email: credentials.email,
                password: credentials.password,
            },
            bookings: Vec::new(),
        })
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub(crate) fn add_booking(&mut self, booking: Booking) -> &Booking {
        self.bookings.push(booking);
        &self.bookings[self.bookings.len() - 1]
    }
}
