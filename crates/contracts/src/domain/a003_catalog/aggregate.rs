use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Client or partner company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub gst_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// List price in rupees
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    pub location: Option<String>,
    pub manager: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOrderStatus {
    #[default]
    Draft,
    Ordered,
    Received,
    Cancelled,
}

/// Stock order placed by a store for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    pub order_number: String,
    pub store_id: String,
    pub product_id: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub order_date: NaiveDate,
    #[serde(default)]
    pub status: PurchaseOrderStatus,
}

impl PurchaseOrder {
    pub fn total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_purchase_order_total() {
        let order = PurchaseOrder {
            id: "po-1".into(),
            order_number: "PO-2024-17".into(),
            store_id: "st-1".into(),
            product_id: "pr-9".into(),
            quantity: 4,
            unit_price: 249.5,
            order_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            status: PurchaseOrderStatus::Ordered,
        };
        assert_eq!(order.total(), 998.0);
    }

    #[test]
    fn test_status_defaults_to_draft() {
        let order: PurchaseOrder = serde_json::from_value(json!({
            "id": "po-2",
            "orderNumber": "PO-2024-18",
            "storeId": "st-1",
            "productId": "pr-1",
            "quantity": 1,
            "unitPrice": 10.0,
            "orderDate": "2024-05-03"
        }))
        .unwrap();
        assert_eq!(order.status, PurchaseOrderStatus::Draft);
    }
}
