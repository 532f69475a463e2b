pub mod booking;
pub mod transport;
pub mod user;
