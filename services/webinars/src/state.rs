//! Application state shared across handlers

use std::sync::Arc;

use crate::{repositories::WebinarRepository, use_cases::ChangeSeats};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub change_seats: ChangeSeats,
    /// Identity used when a request does not name its user
    pub default_user_id: String,
}

impl AppState {
    /// Wire the use cases around a webinar repository
    pub fn new(repository: Arc<dyn WebinarRepository>, default_user_id: impl Into<String>) -> Self {
        Self {
            change_seats: ChangeSeats::new(repository),
            default_user_id: default_user_id.into(),
        }
    }
}
