use std::sync::Arc;
use train_core::BookingStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BookingStore>,
}

impl AppState {
    pub fn new(store: BookingStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
