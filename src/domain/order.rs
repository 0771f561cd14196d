use serde::Deserialize;

/// A placed order, carrying back-references to the ordering user and the
/// ordered product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend row id.
    #[serde(default)]
    pub id: Option<i64>,
    pub order_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
    /// Expected to equal price * quantity; the backend computes it and this
    /// client does not re-check.
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub order_date: String,
    /// 0 = pending, 1 = approved. Only ever transitions 0 -> 1.
    #[serde(default)]
    pub is_approved: u8,
    /// Human-readable status message set by the backend.
    #[serde(default)]
    pub message: String,
}

impl Order {
    pub fn approved(&self) -> bool {
        self.is_approved == 1
    }
}
