use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body of POST /order: `{"items": {"<itemId>": <quantity>, ...}}`.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub items: HashMap<String, u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
}

/// The frontend posts the order id as whatever the DOM gave it, so both
/// a JSON number and a numeric string are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Num(u64),
    Text(String),
}

impl OrderId {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            OrderId::Num(n) => Some(*n),
            OrderId::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Body of POST /admin/update-status.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub order_id: OrderId,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct SimpleResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkTestResponse {
    pub message: String,
    pub client_ip: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_status_accepts_numeric_and_string_order_ids() {
        let req: UpdateStatusRequest =
            serde_json::from_str(r#"{"orderId": 3, "status": "ready"}"#).unwrap();
        assert_eq!(req.order_id.as_u64(), Some(3));

        let req: UpdateStatusRequest =
            serde_json::from_str(r#"{"orderId": "7", "status": "ready"}"#).unwrap();
        assert_eq!(req.order_id.as_u64(), Some(7));

        let req: UpdateStatusRequest =
            serde_json::from_str(r#"{"orderId": "junk", "status": "ready"}"#).unwrap();
        assert_eq!(req.order_id.as_u64(), None);
    }

    #[test]
    fn place_order_tolerates_a_missing_items_map() {
        let req: PlaceOrderRequest = serde_json::from_str("{}").unwrap();
        assert!(req.items.is_empty());
    }
}
