//! Response DTOs for tariff API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{BillBreakdown, SlabCharge};
use super::models::{slab_width, Category, RateTable, SlabLimit, SLAB_BOUNDARIES};

/// One slab line of a bill
#[derive(Debug, Serialize)]
pub struct SlabChargeResponse {
    pub slab: usize,
    pub units: u64,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

impl From<&SlabCharge> for SlabChargeResponse {
    fn from(line: &SlabCharge) -> Self {
        Self {
            slab: line.slab,
            units: line.units,
            rate: line.rate,
            amount: line.amount,
        }
    }
}

/// Response for bill calculation
#[derive(Debug, Serialize)]
pub struct BillResponse {
    pub category: Category,
    pub tariff_category: Category,
    pub units: u64,
    #[serde(with = "rust_decimal::serde::str")]
    pub energy_charge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub fixed_charge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub slabs: Vec<SlabChargeResponse>,
}

impl From<BillBreakdown> for BillResponse {
    fn from(bill: BillBreakdown) -> Self {
        Self {
            category: bill.category,
            tariff_category: bill.category.tariff_category(),
            units: bill.units,
            energy_charge: bill.energy_charge,
            fixed_charge: bill.fixed_charge,
            total: bill.total,
            slabs: bill.slabs.iter().map(SlabChargeResponse::from).collect(),
        }
    }
}

/// A slab's bounds and price within a schedule entry
#[derive(Debug, Serialize)]
pub struct SlabRateResponse {
    pub from_units: u64,
    /// `None` for the unbounded final slab
    pub to_units: Option<u64>,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
}

/// Tariff for one category
#[derive(Debug, Serialize)]
pub struct CategoryRatesResponse {
    pub category: Category,
    pub tariff_category: Category,
    #[serde(with = "rust_decimal::serde::str")]
    pub fixed_charge: Decimal,
    pub slabs: Vec<SlabRateResponse>,
}

impl CategoryRatesResponse {
    pub fn for_category(category: Category) -> Self {
        let table: &RateTable = category.rate_table();
        let mut from_units = 0;
        let slabs = table
            .rates
            .iter()
            .enumerate()
            .map(|(i, &rate)| {
                let to_units = match SLAB_BOUNDARIES[i] {
                    SlabLimit::UpTo(limit) => Some(limit),
                    SlabLimit::Unbounded => None,
                };
                let slab = SlabRateResponse {
                    from_units: from_units + 1,
                    to_units,
                    rate,
                };
                from_units += slab_width(i).unwrap_or(0);
                slab
            })
            .collect();

        Self {
            category,
            tariff_category: category.tariff_category(),
            fixed_charge: table.fixed_charge,
            slabs,
        }
    }
}

/// Response for the full rate schedule
#[derive(Debug, Serialize)]
pub struct RateScheduleResponse {
    pub categories: Vec<CategoryRatesResponse>,
}

/// Generic tariff error response
#[derive(Debug, Serialize)]
pub struct TariffErrorResponse {
    pub error_type: String,
    pub message: String,
}
