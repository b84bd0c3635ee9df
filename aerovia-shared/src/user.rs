use crate::pii::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Authority {
    Passenger,
    Administrator,
}

impl Authority {
    pub fn as_role(&self) -> &'static str {
        match self {
            Authority::Passenger => "PASSENGER",
            Authority::Administrator => "ADMINISTRATOR",
        }
    }
}

/// A registered account. The email doubles as the requester identity on
/// reservations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password: Masked<String>,
    pub authority: Authority,
}
