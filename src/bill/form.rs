//! Validation of the bill form fields.

use serde::Deserialize;

use crate::tariff::Category;

/// Raw fields as submitted by the bill form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub units: String,
}

/// Input errors reported back to the user
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter customer name and account number")]
    MissingRequiredField,

    #[error("Please enter valid number for units")]
    InvalidUnitsFormat,

    #[error("Units consumed cannot be negative")]
    NegativeUnits,
}

/// Form input that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBill {
    pub name: String,
    pub account: String,
    pub category: Category,
    pub units: u64,
}

impl BillForm {
    /// Resolve the selected category; unknown labels are billed as Domestic.
    pub fn category(&self) -> Category {
        Category::resolve(&self.category)
    }

    /// Validate the form. Units are checked before the name and account.
    pub fn validate(&self) -> Result<ValidatedBill, FormError> {
        let units: u64 = self.units.parse().map_err(|_| {
            match self.units.parse::<i128>() {
                Ok(n) if n < 0 => FormError::NegativeUnits,
                _ => FormError::InvalidUnitsFormat,
            }
        })?;

        if self.name.is_empty() || self.account.is_empty() {
            return Err(FormError::MissingRequiredField);
        }

        Ok(ValidatedBill {
            name: self.name.clone(),
            account: self.account.clone(),
            category: self.category(),
            units,
        })
    }
}
