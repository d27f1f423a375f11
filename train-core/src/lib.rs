pub mod receipt;
pub mod section;
pub mod store;

pub use receipt::ReceiptNumbering;
pub use section::{AlternatingSections, FixedSection, RandomSections, SectionPolicy};
pub use store::{BookingStore, StoreSnapshot, DEFAULT_TICKET_PRICE};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Internal service error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
