use serde::Serialize;

/// A product listing to publish.
///
/// Write-only from this client: the backend exposes no product read
/// endpoint here, so creation is fire-and-forget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>, stock: u32) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
            stock,
        }
    }
}
