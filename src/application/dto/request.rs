//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Authentication request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "Password must be 1-100 characters"))]
    pub password: String,
}

/// Entry create/update request.
///
/// Every field is optional here; the entry service owns field validation
/// and reports failures in its fixed order.
#[derive(Debug, Deserialize, Default)]
pub struct EntryRequest {
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub amount: Option<Decimal>,

    /// Owning user's id
    pub user: Option<i64>,

    /// INCOME or EXPENSE
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// PENDING, SETTLED, or CANCELED
    pub status: Option<String>,
}

/// Status change request
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: Option<String>,
}

/// Entry search query parameters.
///
/// Parameter names follow the legacy API surface; `usuario` is required.
#[derive(Debug, Deserialize)]
pub struct EntrySearchQuery {
    #[serde(rename = "descricao")]
    pub description: Option<String>,

    #[serde(rename = "mes")]
    pub month: Option<i32>,

    #[serde(rename = "ano")]
    pub year: Option<i32>,

    #[serde(rename = "usuario")]
    pub user: i64,
}
