//! Webinar entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::user::User;

/// Upper bound on the number of seats a webinar may offer
pub const MAX_SEATS: i32 = 1000;

/// Rejections of a requested seat count
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatsError {
    /// The requested count is not strictly greater than the current one
    #[error("You cannot reduce the number of seats")]
    Reduction,

    /// The requested count exceeds [`MAX_SEATS`]
    #[error("Webinar must have at most 1000 seats")]
    AboveMaximum,

    /// The requested count is zero or negative
    #[error("Webinar must have at least 1 seat")]
    NotPositive,
}

/// Properties a webinar is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebinarProps {
    pub id: String,
    pub organizer_id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

/// A scheduled webinar
///
/// Webinars are immutable values: changing the seat count yields a new
/// webinar through [`Webinar::with_seats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webinar {
    props: WebinarProps,
}

impl Webinar {
    /// Create a webinar from its properties
    pub fn new(props: WebinarProps) -> Self {
        Self { props }
    }

    pub fn id(&self) -> &str {
        &self.props.id
    }

    pub fn organizer_id(&self) -> &str {
        &self.props.organizer_id
    }

    pub fn title(&self) -> &str {
        &self.props.title
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.props.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.props.end_date
    }

    pub fn seats(&self) -> i32 {
        self.props.seats
    }

    /// All properties of the webinar
    pub fn props(&self) -> &WebinarProps {
        &self.props
    }

    /// Whether `user` is the organizer of this webinar
    pub fn is_organized_by(&self, user: &User) -> bool {
        self.props.organizer_id == user.id
    }

    /// Copy of this webinar holding `seats` seats
    ///
    /// Fails when `seats` falls outside `1..=MAX_SEATS`.
    pub fn with_seats(&self, seats: i64) -> Result<Self, SeatsError> {
        if seats > i64::from(MAX_SEATS) {
            return Err(SeatsError::AboveMaximum);
        }
        if seats <= 0 {
            return Err(SeatsError::NotPositive);
        }

        let seats = i32::try_from(seats).map_err(|_| SeatsError::AboveMaximum)?;
        Ok(Self::new(WebinarProps {
            seats,
            ..self.props.clone()
        }))
    }
}

impl From<WebinarProps> for Webinar {
    fn from(props: WebinarProps) -> Self {
        Self::new(props)
    }
}
