use test_context::{test_context, TestContext};
use travel_booking::{
    models::transport::{Transport, TransportKind},
    services::{booking_service::BookingService, transport_service::TransportService},
    utils::error::AppError,
};

mod common {
    pub mod test_utils;
}
use common::test_utils::{seeded_service, small_bus, test_user};

struct TransportServiceContext {
    transport_service: TransportService,
}

impl TestContext for TransportServiceContext {
    fn setup() -> Self {
        TransportServiceContext {
            transport_service: seeded_service(),
        }
    }
}

#[test_context(TransportServiceContext)]
#[test]
fn test_search_single_match(ctx: &mut TransportServiceContext) {
    let result = ctx.transport_service.search_transports("Kampala", "Nairobi");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].code, "UG001");
    assert!(matches!(result[0].kind, TransportKind::Flight { .. }));
    assert_eq!(result[0].seats(), 100);
}

#[test_context(TransportServiceContext)]
#[test]
fn test_search_no_match_is_empty(ctx: &mut TransportServiceContext) {
    assert!(ctx.transport_service.search_transports("Kampala", "Paris").is_empty());
}

#[test_context(TransportServiceContext)]
#[test]
fn test_search_is_case_sensitive(ctx: &mut TransportServiceContext) {
    assert!(ctx.transport_service.search_transports("kampala", "nairobi").is_empty());
    assert!(ctx.transport_service.search_transports("Kampala ", "Nairobi").is_empty());
    // reversed route is a different route
    assert!(ctx.transport_service.search_transports("Nairobi", "Kampala").is_empty());
}

#[test_context(TransportServiceContext)]
#[test]
fn test_all_keeps_seed_order(ctx: &mut TransportServiceContext) {
    let codes: Vec<&str> = ctx.transport_service.all().map(|t| t.code.as_str()).collect();
    assert_eq!(codes, ["UG001", "UG002", "BUS001", "UG003"]);
    assert_eq!(ctx.transport_service.len(), 4);
}

#[test_context(TransportServiceContext)]
#[test]
fn test_get_mut_unknown_code(ctx: &mut TransportServiceContext) {
    let result = ctx.transport_service.get_mut("UG999");
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[test_context(TransportServiceContext)]
#[test]
fn test_get_booked_returns_live_transport(ctx: &mut TransportServiceContext) -> Result<(), AppError> {
    let mut user = test_user()?;
    let transport = ctx.transport_service.get_mut("UG003")?;
    let booking = BookingService::new()
        .book_transport(&mut user, transport, "Alice")?
        .clone();

    let booked = ctx.transport_service.get_booked(&booking)?;
    assert_eq!(booked.code, "UG003");
    assert_eq!(booked.seats(), 69);
    assert_eq!(
        booking.summary_line(booked),
        format!(
            "Booking ID: {}, Flight: UG003 from Kampala to Johannesburg on 2024-11-28 at 12:00pm - Seats available: 69, Passenger: Alice",
            booking.booking_id
        )
    );
    Ok(())
}

#[test]
fn test_search_preserves_input_order() -> anyhow::Result<()> {
    let service = TransportService::new(vec![
        small_bus("BUS002", 10),
        Transport::flight(
            "Air Uganda",
            "UG010",
            "Kampala",
            "Jinja",
            "2024-11-29",
            "7:00am",
            20,
            "Gate C",
            "Entebbe International Airport",
        ),
        small_bus("BUS001", 5),
    ])?;

    let codes: Vec<&str> = service
        .search_transports("Kampala", "Jinja")
        .iter()
        .map(|t| t.code.as_str())
        .collect();
    assert_eq!(codes, ["BUS002", "UG010", "BUS001"]);
    Ok(())
}

#[test]
fn test_duplicate_codes_rejected() {
    let result = TransportService::new(vec![small_bus("BUS001", 10), small_bus("BUS001", 3)]);
    assert!(matches!(result, Err(AppError::Conflict(_))));
}
