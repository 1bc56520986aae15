use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
}

/// Mutable fields as they arrive in a request body. A client-supplied `id`
/// is dropped on deserialization; the store assigns identities.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub quantity: i32,
}
