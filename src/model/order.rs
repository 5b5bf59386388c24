use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_PENDING: &str = "pending";

/// One priced line of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub total: f64,
}

/// An entry in the order ledger. Orders are never deleted; only `status`
/// is mutated, and only through the admin surface. The status is an open
/// set of strings ("pending", "preparing", "ready", "completed",
/// "cancelled" in normal use) and is deliberately not validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub user_id: u64,
    pub username: String,
    pub items: Vec<OrderLine>,
    pub total_amount: f64,
    pub status: String,
    pub order_date: DateTime<Utc>,
}
