pub mod booking;

pub use booking::{Passenger, Reservation, Section, SectionSeat, UnknownSection};
