use crate::models::booking::Booking;
use crate::models::transport::Transport;
use crate::models::user::User;
use crate::utils::error::{AppError, AppResult};

pub struct BookingService;

impl BookingService {
    pub fn new() -> Self {
        BookingService
    }

    /// Reserve one seat on `transport` for `passenger_name` and record the
    /// booking on `user`.
    ///
    /// A transport with no seats left is reported as a conflict and neither the
    /// transport nor the user is touched.
    pub fn book_transport<'u>(
        &self,
        user: &'u mut User,
        transport: &mut Transport,
        passenger_name: &str,
    ) -> AppResult<&'u Booking> {
        if !transport.take_seat() {
            tracing::info!(code = %transport.code, "booking refused, transport is full");
            return Err(AppError::Conflict("No seats available.".into()));
        }

        let booking = Booking::new(transport, passenger_name);
        let kind: &'static str = (&transport.kind).into();
        tracing::info!(
            booking_id = %booking.booking_id,
            code = %transport.code,
            kind,
            seats_left = transport.seats(),
            booked_at = %booking.booked_at,
            "booking confirmed"
        );

        Ok(user.add_booking(booking))
    }
}

impl Default for BookingService {
    fn default() -> Self {
        Self::new()
    }
}
