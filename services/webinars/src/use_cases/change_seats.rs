//! Change the number of seats of a webinar

use std::sync::Arc;

use thiserror::Error;

use crate::{
    models::{SeatsError, User},
    repositories::{RepositoryError, WebinarRepository},
};

/// Input of [`ChangeSeats::execute`]
#[derive(Debug, Clone)]
pub struct ChangeSeatsPayload {
    pub user: User,
    pub webinar_id: String,
    pub seats: i64,
}

/// Category of a [`ChangeSeatsError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Forbidden,
    InvalidOperation,
    Internal,
}

/// Reasons a seat change is refused
#[derive(Error, Debug)]
pub enum ChangeSeatsError {
    #[error("Webinar not found")]
    NotFound,

    #[error("User is not allowed to update this webinar")]
    Forbidden,

    #[error(transparent)]
    InvalidOperation(#[from] SeatsError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ChangeSeatsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChangeSeatsError::NotFound => ErrorKind::NotFound,
            ChangeSeatsError::Forbidden => ErrorKind::Forbidden,
            ChangeSeatsError::InvalidOperation(_) => ErrorKind::InvalidOperation,
            ChangeSeatsError::Repository(_) => ErrorKind::Internal,
        }
    }
}

/// Raise the seat count of a webinar on behalf of its organizer
#[derive(Clone)]
pub struct ChangeSeats {
    repository: Arc<dyn WebinarRepository>,
}

impl ChangeSeats {
    pub fn new(repository: Arc<dyn WebinarRepository>) -> Self {
        Self { repository }
    }

    /// Checks run in a fixed order: existence, organizer, reduction, maximum.
    /// Nothing is written unless every check passes.
    pub async fn execute(&self, payload: ChangeSeatsPayload) -> Result<(), ChangeSeatsError> {
        let webinar = self
            .repository
            .find_by_id(&payload.webinar_id)
            .await?
            .ok_or(ChangeSeatsError::NotFound)?;

        if !webinar.is_organized_by(&payload.user) {
            return Err(ChangeSeatsError::Forbidden);
        }

        if payload.seats <= i64::from(webinar.seats()) {
            return Err(SeatsError::Reduction.into());
        }

        let updated = webinar.with_seats(payload.seats)?;
        self.repository.update(&updated).await?;

        Ok(())
    }
}
