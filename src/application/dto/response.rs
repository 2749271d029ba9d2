//! Response DTOs
//!
//! Data structures for API response bodies.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Entry, EntryKind, EntryStatus, User};

/// User response (password never leaves the server)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Entry response
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: i64,
    pub description: String,
    pub month: i32,
    pub year: i32,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub status: EntryStatus,
    pub user: i64,
    pub created_at: String,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            description: entry.description,
            month: entry.month,
            year: entry.year,
            amount: entry.amount,
            kind: entry.kind,
            status: entry.status,
            user: entry.user_id,
            created_at: entry.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn user_response_has_no_password_field() {
        let response = UserResponse::from(User {
            id: 1,
            name: "Ana".to_string(),
            email: "u@x.com".to_string(),
            password: "secret".to_string(),
            created_at: Utc::now(),
        });

        let serialized = serde_json::to_string(&response).expect("response should serialize");
        assert!(!serialized.contains("secret"));
        assert!(!serialized.contains("password"));
    }

    #[test]
    fn entry_response_serializes_amount_as_a_number() {
        let response = EntryResponse::from(Entry {
            id: 1,
            description: "Salary".to_string(),
            month: 1,
            year: 2024,
            amount: dec!(3500.25),
            kind: EntryKind::Income,
            status: EntryStatus::Settled,
            user_id: 7,
            created_at: Utc::now(),
        });

        let serialized = serde_json::to_string(&response).expect("response should serialize");
        assert!(serialized.contains("\"amount\":3500.25"));
        assert!(serialized.contains("\"type\":\"INCOME\""));
        assert!(serialized.contains("\"user\":7"));
    }
}
