use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;
use train_shared::{Masked, Passenger, Reservation, Section, SectionSeat};

use crate::receipt::ReceiptNumbering;
use crate::section::{RandomSections, SectionPolicy};
use crate::{CoreError, CoreResult};

/// Fare charged for every ticket unless configured otherwise
pub const DEFAULT_TICKET_PRICE: f64 = 20.0;

/// A stored reservation together with its issue order.
#[derive(Debug, Clone)]
struct IssuedReceipt {
    sequence: u64,
    reservation: Reservation,
}

/// Everything guarded by the store lock.
#[derive(Debug, Default)]
struct Ledger {
    receipts: HashMap<String, IssuedReceipt>,
    user_seats: HashMap<String, String>,
    section_a: BTreeMap<String, String>,
    section_b: BTreeMap<String, String>,
    seat_counter: u64,
    receipts_issued: u64,
}

impl Ledger {
    fn section(&self, section: Section) -> &BTreeMap<String, String> {
        match section {
            Section::A => &self.section_a,
            Section::B => &self.section_b,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut BTreeMap<String, String> {
        match section {
            Section::A => &mut self.section_a,
            Section::B => &mut self.section_b,
        }
    }

    /// Earliest issued receipt held by `email`
    fn first_receipt_for(&self, email: &str) -> Option<String> {
        self.receipts
            .iter()
            .filter(|(_, issued)| issued.reservation.passenger.email == email)
            .min_by_key(|(_, issued)| issued.sequence)
            .map(|(id, _)| id.clone())
    }
}

/// In-memory booking state shared by every request handler.
///
/// The receipt map, the seat assignments and both section maps live behind
/// one mutex. Every operation, reads included, holds it for its whole
/// duration, so operations are serializable and the maps never disagree.
pub struct BookingStore {
    ledger: Mutex<Ledger>,
    policy: Box<dyn SectionPolicy>,
    ticket_price: f64,
    numbering: ReceiptNumbering,
}

impl BookingStore {
    /// Store with random section assignment, the default fare and
    /// count-based receipt ids.
    pub fn new() -> Self {
        Self::with_policy(RandomSections)
    }

    pub fn with_policy(policy: impl SectionPolicy + 'static) -> Self {
        Self {
            ledger: Mutex::new(Ledger::default()),
            policy: Box::new(policy),
            ticket_price: DEFAULT_TICKET_PRICE,
            numbering: ReceiptNumbering::default(),
        }
    }

    pub fn with_ticket_price(mut self, price: f64) -> Self {
        self.ticket_price = price;
        self
    }

    pub fn with_receipt_numbering(mut self, numbering: ReceiptNumbering) -> Self {
        self.numbering = numbering;
        self
    }

    pub fn ticket_price(&self) -> f64 {
        self.ticket_price
    }

    fn ledger(&self) -> CoreResult<MutexGuard<'_, Ledger>> {
        self.ledger
            .lock()
            .map_err(|_| CoreError::Internal("booking store lock poisoned".to_string()))
    }

    /// Buy a ticket and return its receipt id.
    ///
    /// Allocates the next `Seat-<n>`, files the reservation under a fresh
    /// `rec-<n>` id and places the passenger in a section chosen by the
    /// store's policy. Nothing changes if validation fails.
    pub fn purchase(
        &self,
        origin: &str,
        destination: &str,
        passenger: Option<Passenger>,
    ) -> CoreResult<String> {
        let mut ledger = self.ledger()?;

        let passenger = passenger.ok_or_else(|| {
            CoreError::InvalidArgument("user information is required".to_string())
        })?;
        if origin.is_empty() {
            return Err(CoreError::InvalidArgument("origin is required".to_string()));
        }
        if destination.is_empty() {
            return Err(CoreError::InvalidArgument("destination is required".to_string()));
        }

        let receipt_id = {
            let receipts = &ledger.receipts;
            self.numbering
                .next_id(receipts.len(), ledger.receipts_issued, |id| receipts.contains_key(id))
        };

        ledger.seat_counter += 1;
        let seat = format!("Seat-{}", ledger.seat_counter);
        let email = passenger.email.clone();

        ledger.receipts_issued += 1;
        let sequence = ledger.receipts_issued;
        ledger.receipts.insert(
            receipt_id.clone(),
            IssuedReceipt {
                sequence,
                reservation: Reservation {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                    passenger,
                    price_paid: self.ticket_price,
                    seat: seat.clone(),
                },
            },
        );
        ledger.user_seats.insert(email.clone(), seat.clone());

        // A repeat buyer may already sit in the other section
        ledger.section_a.remove(&email);
        ledger.section_b.remove(&email);
        let section = self.policy.choose();
        ledger.section_mut(section).insert(email.clone(), seat.clone());

        debug!(
            receipt_id = %receipt_id,
            seat = %seat,
            section = %section,
            passenger = %Masked(&email),
            "ticket purchased"
        );

        Ok(receipt_id)
    }

    /// Look up a receipt by id
    pub fn get_receipt(&self, receipt_id: &str) -> CoreResult<Reservation> {
        let ledger = self.ledger()?;
        ledger
            .receipts
            .get(receipt_id)
            .map(|issued| issued.reservation.clone())
            .ok_or_else(|| CoreError::NotFound("receipt not found".to_string()))
    }

    /// Who sits in `section_name` ("SectionA" or "SectionB").
    ///
    /// Rows carry only the passenger email. Rows come back ordered by email.
    pub fn list_by_section(&self, section_name: &str) -> CoreResult<Vec<SectionSeat>> {
        let section: Section = section_name
            .parse()
            .map_err(|e: train_shared::UnknownSection| CoreError::InvalidArgument(e.to_string()))?;

        let ledger = self.ledger()?;
        Ok(ledger
            .section(section)
            .iter()
            .map(|(email, seat)| SectionSeat {
                passenger: Passenger::email_only(email.clone()),
                seat: seat.clone(),
            })
            .collect())
    }

    /// Drop a passenger's seat, section entry and earliest receipt.
    ///
    /// Returns `false` without touching anything when the email holds no seat.
    pub fn remove_user(&self, email: &str) -> CoreResult<bool> {
        let mut ledger = self.ledger()?;

        if !ledger.user_seats.contains_key(email) {
            return Ok(false);
        }

        ledger.section_a.remove(email);
        ledger.section_b.remove(email);
        ledger.user_seats.remove(email);

        let removed = ledger.first_receipt_for(email);
        if let Some(receipt_id) = &removed {
            ledger.receipts.remove(receipt_id);
        }

        debug!(
            passenger = %Masked(email),
            receipt_id = ?removed,
            "passenger removed"
        );

        Ok(true)
    }

    /// Move a passenger to `new_seat`.
    ///
    /// The seat label is taken as given; it is not checked for format or
    /// against other passengers' seats. Returns `false` without touching
    /// anything when the email holds no seat.
    pub fn modify_seat(&self, email: &str, new_seat: &str) -> CoreResult<bool> {
        let mut ledger = self.ledger()?;

        if !ledger.user_seats.contains_key(email) {
            return Ok(false);
        }

        let section = if ledger.section_b.contains_key(email) {
            Section::B
        } else {
            Section::A
        };
        ledger
            .section_mut(section)
            .insert(email.to_string(), new_seat.to_string());

        if let Some(receipt_id) = ledger.first_receipt_for(email) {
            if let Some(issued) = ledger.receipts.get_mut(&receipt_id) {
                issued.reservation.seat = new_seat.to_string();
            }
        }

        ledger
            .user_seats
            .insert(email.to_string(), new_seat.to_string());

        debug!(
            passenger = %Masked(email),
            seat = %new_seat,
            section = %section,
            "seat modified"
        );

        Ok(true)
    }

    /// Consistent copy of the whole store, taken under the lock
    pub fn snapshot(&self) -> CoreResult<StoreSnapshot> {
        let ledger = self.ledger()?;
        Ok(StoreSnapshot {
            receipts: ledger
                .receipts
                .iter()
                .map(|(id, issued)| (id.clone(), issued.reservation.clone()))
                .collect(),
            user_seats: ledger.user_seats.clone().into_iter().collect(),
            section_a: ledger.section_a.clone(),
            section_b: ledger.section_b.clone(),
            seat_counter: ledger.seat_counter,
        })
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of the store
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    pub receipts: BTreeMap<String, Reservation>,
    pub user_seats: BTreeMap<String, String>,
    pub section_a: BTreeMap<String, String>,
    pub section_b: BTreeMap<String, String>,
    pub seat_counter: u64,
}

impl StoreSnapshot {
    /// Check that seat assignments and section maps agree: every seated
    /// email is in exactly one section with the same seat, and no section
    /// holds an email without a seat.
    pub fn check_consistency(&self) -> CoreResult<()> {
        for (email, seat) in &self.user_seats {
            let a = self.section_a.get(email);
            let b = self.section_b.get(email);
            match (a, b) {
                (Some(s), None) | (None, Some(s)) if s == seat => {}
                (Some(_), Some(_)) => {
                    return Err(CoreError::Internal(format!(
                        "{} is listed in both sections",
                        Masked(email)
                    )))
                }
                (None, None) => {
                    return Err(CoreError::Internal(format!(
                        "{} has a seat but no section",
                        Masked(email)
                    )))
                }
                _ => {
                    return Err(CoreError::Internal(format!(
                        "{} section seat does not match {}",
                        Masked(email),
                        seat
                    )))
                }
            }
        }

        for email in self.section_a.keys().chain(self.section_b.keys()) {
            if !self.user_seats.contains_key(email) {
                return Err(CoreError::Internal(format!(
                    "{} is in a section without a seat",
                    Masked(email)
                )));
            }
        }

        Ok(())
    }
}
