//! Request DTOs for tariff API endpoints.

use serde::Deserialize;

use super::models::Category;

/// Request to calculate a bill
#[derive(Debug, Deserialize)]
pub struct CalculateBillRequest {
    /// Wide enough to carry any `u64` and report negatives explicitly
    pub units: i128,
    /// Category label; unknown or missing labels are billed as Domestic
    #[serde(default)]
    pub category: String,
}

impl CalculateBillRequest {
    pub fn category(&self) -> Category {
        Category::resolve(&self.category)
    }
}
