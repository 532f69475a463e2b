use std::io::{BufRead, Write};

use crate::config::AppConfig;
use crate::console::prompt::Prompter;
use crate::models::user::User;
use crate::services::booking_service::BookingService;
use crate::services::transport_service::TransportService;
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::{is_valid_email, is_valid_name, is_valid_password, Credentials};

pub const WELCOME: &str = "WELCOME! AND THANK YOU FOR CHOOSING AIR UGANDA.\n";

/// One interactive run: identity, a booking loop, then the summary.
pub struct Session<R, W> {
    prompt: Prompter<R, W>,
    transport_service: TransportService,
    booking_service: BookingService,
    max_input_attempts: Option<u32>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, transport_service: TransportService, config: &AppConfig) -> Self {
        Session {
            prompt: Prompter::new(input, output),
            transport_service,
            booking_service: BookingService::new(),
            max_input_attempts: config.max_input_attempts,
        }
    }

    pub fn transport_service(&self) -> &TransportService {
        &self.transport_service
    }

    /// Drive the whole session and hand back the user with their bookings.
    ///
    /// Running out of input while collecting the identity ends the session
    /// with `AppError::InputClosed`; inside the booking loop it counts as
    /// declining another booking.
    pub fn run(&mut self) -> AppResult<User> {
        self.prompt.say(WELCOME)?;

        let mut user = self.collect_identity()?;
        tracing::info!(user = %user.person, "session started");

        loop {
            match self.booking_round(&mut user) {
                Ok(()) => {}
                Err(AppError::InputClosed) => break,
                Err(e) => return Err(e),
            }
            if !self.wants_another()? {
                break;
            }
        }

        self.show_summary(&user)?;
        Ok(user)
    }

    fn collect_identity(&mut self) -> AppResult<User> {
        let limit = self.max_input_attempts;
        let name = self
            .prompt
            .ask_until("Enter your name: ", "Enter a valid username", limit, is_valid_name)?;
        let email = self.prompt.ask_until(
            "Enter your email address: ",
            "Invalid email format. Please try again.",
            limit,
            is_valid_email,
        )?;
        let password = self.prompt.ask_until(
            "Enter your password: ",
            "Password must be at least 8 characters. Please try again.",
            limit,
            is_valid_password,
        )?;

        User::new(Credentials { name, email, password })
    }

    fn booking_round(&mut self, user: &mut User) -> AppResult<()> {
        self.prompt.say("\nAvailable Transports:")?;
        for line in self.transport_service.all().map(|t| t.render_details()).collect::<Vec<_>>() {
            self.prompt.say(&line)?;
        }

        let departure = self.prompt.ask("\nEnter departure city: ")?;
        let destination = self.prompt.ask("Enter destination city: ")?;

        let matches: Vec<(String, String)> = self
            .transport_service
            .search_transports(&departure, &destination)
            .into_iter()
            .map(|t| (t.code.clone(), t.render_details()))
            .collect();

        if matches.is_empty() {
            return self.prompt.say("No available transports for the selected route.");
        }

        self.prompt.say("\nAvailable Transports:")?;
        for (_, details) in &matches {
            self.prompt.say(details)?;
        }

        let choice = self.prompt.ask("Select a transport number to book: ")?;
        if !matches.iter().any(|(code, _)| *code == choice) {
            return self.prompt.say("Invalid transport selection.");
        }

        let passenger_name = self.prompt.ask("Enter passenger name: ")?;
        match self.book(user, &choice, &passenger_name) {
            Ok(message) => self.prompt.say(&message),
            Err(e) if e.is_recoverable() => self.prompt.say(&e.user_message()),
            Err(e) => Err(e),
        }
    }

    fn book(&mut self, user: &mut User, code: &str, passenger_name: &str) -> AppResult<String> {
        let transport = self.transport_service.get_mut(code)?;
        let booking = self
            .booking_service
            .book_transport(user, transport, passenger_name)?;
        Ok(format!("Booking successful: {}", booking.booking_id))
    }

    fn wants_another(&mut self) -> AppResult<bool> {
        match self.prompt.ask("Do you want to book another transport? (yes/no): ") {
            Ok(answer) => Ok(answer.trim().to_lowercase() == "yes"),
            Err(AppError::InputClosed) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn show_summary(&mut self, user: &User) -> AppResult<()> {
        if user.bookings().is_empty() {
            return self.prompt.say("No bookings found.");
        }
        // the inventory never shrinks, so every booked code is still present
        for booking in user.bookings() {
            let transport = self.transport_service.get_booked(booking)?;
            let line = booking.summary_line(transport);
            self.prompt.say(&line)?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }
}
