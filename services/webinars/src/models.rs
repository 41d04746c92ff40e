//! API models for request and response payloads

use serde::Deserialize;
use serde_json::Value;

pub mod user;
pub mod webinar;

pub use user::User;
pub use webinar::{MAX_SEATS, SeatsError, Webinar, WebinarProps};

/// Request body for changing the seats of a webinar
///
/// Clients send `seats` either as a JSON number or as a numeric string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSeatsRequest {
    #[serde(default)]
    pub seats: Value,
    /// Acting user; falls back to the configured default user when absent
    pub user_id: Option<String>,
}

impl ChangeSeatsRequest {
    /// Parse the raw seat value into an integer
    ///
    /// Integral values outside the `i64` range saturate to its bounds.
    pub fn parse_seats(&self) -> Option<i64> {
        match &self.seats {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_u64().map(|_| i64::MAX))
                .or_else(|| n.as_f64().and_then(integral)),
            Value::String(s) => {
                let s = s.trim();
                s.parse()
                    .ok()
                    .or_else(|| s.parse().ok().and_then(integral))
            }
            _ => None,
        }
    }
}

fn integral(value: f64) -> Option<i64> {
    // `as` saturates out-of-range floats
    (value.is_finite() && value.fract() == 0.0).then(|| value as i64)
}
