pub mod models;
pub mod pii;

pub use models::{Passenger, Reservation, Section, SectionSeat, UnknownSection};
pub use pii::Masked;
