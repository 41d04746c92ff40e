//! Application use cases

pub mod change_seats;

pub use change_seats::{ChangeSeats, ChangeSeatsError, ChangeSeatsPayload, ErrorKind};
