use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A traveller, keyed by email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Passenger {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Email-only projection used by section listings
    pub fn email_only(email: impl Into<String>) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: email.into(),
        }
    }
}

/// A purchased ticket as shown on the receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub origin: String,
    pub destination: String,
    pub passenger: Passenger,
    pub price_paid: f64,
    pub seat: String,
}

/// The two seating sections of the train
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "SectionA")]
    A,
    #[serde(rename = "SectionB")]
    B,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::A, Section::B];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::A => "SectionA",
            Section::B => "SectionB",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid section: {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SectionA" => Ok(Section::A),
            "SectionB" => Ok(Section::B),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

/// One row of a section listing: who sits where
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSeat {
    pub passenger: Passenger,
    pub seat: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_parsing() {
        assert_eq!("SectionA".parse::<Section>().unwrap(), Section::A);
        assert_eq!("SectionB".parse::<Section>().unwrap(), Section::B);

        // Names are matched exactly
        assert!("sectiona".parse::<Section>().is_err());
        assert!("SectionC".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
    }

    #[test]
    fn test_section_round_trips_through_display() {
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_reservation_serialization() {
        let reservation = Reservation {
            origin: "London".to_string(),
            destination: "France".to_string(),
            passenger: Passenger::new("John", "Doe", "john.doe@example.com"),
            price_paid: 20.0,
            seat: "Seat-1".to_string(),
        };

        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["passenger"]["email"], "john.doe@example.com");
        assert_eq!(json["price_paid"], 20.0);

        let section = serde_json::to_string(&Section::B).unwrap();
        assert_eq!(section, "\"SectionB\"");
    }
}
