use crate::model::order::{Order, OrderLine};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn insert(
        &self,
        user_id: u64,
        username: String,
        items: Vec<OrderLine>,
        total_amount: f64,
        status: String,
    ) -> RepositoryResult<Order>;
    async fn list_by_user(&self, user_id: u64) -> Vec<Order>;
    async fn list_all(&self) -> Vec<Order>;
    /// Sets the status of an order. The status string is not validated
    /// against any enum. Returns NotFound for an unknown id; the HTTP
    /// layer deliberately ignores that outcome.
    async fn update_status(&self, order_id: u64, status: String) -> RepositoryResult<()>;
}

struct Ledger {
    orders: Vec<Order>,
    next_id: u64,
}

/// Append-only in-memory ledger. Orders are never removed; only `status`
/// mutates. The lock serializes id assignment so ids stay strictly
/// increasing and are never reused.
pub struct InMemoryOrderRepository {
    ledger: RwLock<Ledger>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        InMemoryOrderRepository {
            ledger: RwLock::new(Ledger { orders: Vec::new(), next_id: 1 }),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert(
        &self,
        user_id: u64,
        username: String,
        items: Vec<OrderLine>,
        total_amount: f64,
        status: String,
    ) -> RepositoryResult<Order> {
        let mut ledger = self.ledger.write().map_err(|_| {
            RepositoryError::validation("Order ledger lock poisoned".to_string())
        })?;
        let order = Order {
            id: ledger.next_id,
            user_id,
            username,
            items,
            total_amount,
            status,
            order_date: Utc::now(),
        };
        ledger.next_id += 1;
        ledger.orders.push(order.clone());
        Ok(order)
    }

    async fn list_by_user(&self, user_id: u64) -> Vec<Order> {
        match self.ledger.read() {
            Ok(ledger) => ledger
                .orders
                .iter()
                .filter(|o| o.user_id == user_id)
                .cloned()
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    async fn list_all(&self) -> Vec<Order> {
        match self.ledger.read() {
            Ok(ledger) => ledger.orders.clone(),
            Err(_) => Vec::new(),
        }
    }

    async fn update_status(&self, order_id: u64, status: String) -> RepositoryResult<()> {
        let mut ledger = self.ledger.write().map_err(|_| {
            RepositoryError::validation("Order ledger lock poisoned".to_string())
        })?;
        match ledger.orders.iter_mut().find(|o| o.id == order_id) {
            Some(order) => {
                order.status = status;
                Ok(())
            }
            None => Err(RepositoryError::not_found(format!(
                "No order with id {}",
                order_id
            ))),
        }
    }
}
