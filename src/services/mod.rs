pub mod booking_service;
pub mod transport_service;
