//! Mapping between the wire messages in `train-proto` and the shared models.

use train_proto as proto;
use train_shared::{Passenger, Reservation, SectionSeat};

pub fn passenger_from_proto(user: proto::User) -> Passenger {
    Passenger {
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
    }
}

pub fn passenger_to_proto(passenger: Passenger) -> proto::User {
    proto::User {
        first_name: passenger.first_name,
        last_name: passenger.last_name,
        email: passenger.email,
    }
}

pub fn receipt_to_proto(reservation: Reservation) -> proto::ReceiptResponse {
    proto::ReceiptResponse {
        from: reservation.origin,
        to: reservation.destination,
        user: Some(passenger_to_proto(reservation.passenger)),
        price_paid: reservation.price_paid,
        seat: reservation.seat,
    }
}

/// `None` when the server left out the passenger
pub fn receipt_from_proto(receipt: proto::ReceiptResponse) -> Option<Reservation> {
    Some(Reservation {
        origin: receipt.from,
        destination: receipt.to,
        passenger: passenger_from_proto(receipt.user?),
        price_paid: receipt.price_paid,
        seat: receipt.seat,
    })
}

pub fn section_seat_to_proto(row: SectionSeat) -> proto::UserSeat {
    proto::UserSeat {
        user: Some(proto::User {
            email: row.passenger.email,
            ..Default::default()
        }),
        seat: row.seat,
    }
}

pub fn section_seat_from_proto(row: proto::UserSeat) -> SectionSeat {
    let email = row.user.map(|u| u.email).unwrap_or_default();
    SectionSeat {
        passenger: Passenger::email_only(email),
        seat: row.seat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_mapping() {
        let reservation = Reservation {
            origin: "London".to_string(),
            destination: "France".to_string(),
            passenger: Passenger::new("John", "Doe", "john.doe@example.com"),
            price_paid: 20.0,
            seat: "Seat-1".to_string(),
        };

        let wire = receipt_to_proto(reservation.clone());
        assert_eq!(wire.from, "London");
        assert_eq!(wire.to, "France");
        assert_eq!(wire.user.as_ref().unwrap().first_name, "John");

        assert_eq!(receipt_from_proto(wire), Some(reservation));
    }

    #[test]
    fn test_receipt_without_user() {
        let wire = proto::ReceiptResponse {
            from: "London".to_string(),
            to: "France".to_string(),
            user: None,
            price_paid: 20.0,
            seat: "Seat-1".to_string(),
        };
        assert_eq!(receipt_from_proto(wire), None);
    }

    #[test]
    fn test_section_rows_carry_only_email() {
        let row = SectionSeat {
            passenger: Passenger::new("John", "Doe", "john.doe@example.com"),
            seat: "Seat-3".to_string(),
        };
        let wire = section_seat_to_proto(row);
        let user = wire.user.as_ref().unwrap();
        assert_eq!(user.email, "john.doe@example.com");
        assert!(user.first_name.is_empty());

        let back = section_seat_from_proto(wire);
        assert_eq!(back.passenger, Passenger::email_only("john.doe@example.com"));
        assert_eq!(back.seat, "Seat-3");
    }
}
