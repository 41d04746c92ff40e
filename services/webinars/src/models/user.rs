//! Acting user

use serde::{Deserialize, Serialize};

/// A user as seen by the webinar service; only the identity matters here
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
