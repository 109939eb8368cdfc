//! Tariff data: customer categories, slab boundaries and rate tables.
//!
//! All tariff figures are compile-time constants. Nothing here is mutated at
//! runtime.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Number of consumption slabs shared by every rate table.
pub const SLAB_COUNT: usize = 5;

/// Upper limit of a consumption slab, in cumulative units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlabLimit {
    UpTo(u64),
    Unbounded,
}

/// Cumulative slab thresholds: 0-30, 31-60, 61-90, 91-120, 121+.
pub const SLAB_BOUNDARIES: [SlabLimit; SLAB_COUNT] = [
    SlabLimit::UpTo(30),
    SlabLimit::UpTo(60),
    SlabLimit::UpTo(90),
    SlabLimit::UpTo(120),
    SlabLimit::Unbounded,
];

/// Width of slab `index`, or `None` for the unbounded final slab.
pub fn slab_width(index: usize) -> Option<u64> {
    let lower = match index {
        0 => 0,
        i => match SLAB_BOUNDARIES[i - 1] {
            SlabLimit::UpTo(limit) => limit,
            SlabLimit::Unbounded => return None,
        },
    };

    match SLAB_BOUNDARIES[index] {
        SlabLimit::UpTo(upper) => Some(upper - lower),
        SlabLimit::Unbounded => None,
    }
}

/// Per-unit prices for each slab plus the flat monthly service charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateTable {
    pub rates: [Decimal; SLAB_COUNT],
    pub fixed_charge: Decimal,
}

pub const DOMESTIC: RateTable = RateTable {
    rates: [dec!(8.00), dec!(10.00), dec!(16.00), dec!(50.00), dec!(75.00)],
    fixed_charge: dec!(150.00),
};

pub const COMMERCIAL: RateTable = RateTable {
    rates: [dec!(12.00), dec!(15.00), dec!(18.00), dec!(55.00), dec!(80.00)],
    fixed_charge: dec!(400.00),
};

pub const INDUSTRIAL: RateTable = RateTable {
    rates: [dec!(15.00), dec!(20.00), dec!(25.00), dec!(60.00), dec!(90.00)],
    fixed_charge: dec!(600.00),
};

/// Customer classification selecting the rate table and fixed charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Domestic,
    Commercial,
    Industrial,
    Government,
    #[serde(rename = "Religious places")]
    ReligiousPlaces,
}

impl Category {
    /// Every category, in the order the form lists them.
    pub const ALL: [Category; 5] = [
        Category::Domestic,
        Category::Commercial,
        Category::Industrial,
        Category::Government,
        Category::ReligiousPlaces,
    ];

    /// Display label, as shown on the form and the printed bill.
    pub fn label(self) -> &'static str {
        match self {
            Category::Domestic => "Domestic",
            Category::Commercial => "Commercial",
            Category::Industrial => "Industrial",
            Category::Government => "Government",
            Category::ReligiousPlaces => "Religious places",
        }
    }

    /// Look up a category by its exact label.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Resolve a submitted label, billing unknown or empty labels as Domestic.
    pub fn resolve(label: &str) -> Category {
        if label.is_empty() {
            return Category::Domestic;
        }
        label.parse().unwrap_or_else(|e: UnknownCategory| {
            tracing::warn!("{}, using Domestic", e);
            Category::Domestic
        })
    }

    /// The category whose tariff is actually charged.
    ///
    /// Government and Religious places have no tariff of their own and are
    /// billed as Domestic.
    pub fn tariff_category(self) -> Category {
        match self {
            Category::Commercial => Category::Commercial,
            Category::Industrial => Category::Industrial,
            Category::Domestic | Category::Government | Category::ReligiousPlaces => {
                Category::Domestic
            }
        }
    }

    /// Rate table applied to this category.
    pub fn rate_table(self) -> &'static RateTable {
        match self.tariff_category() {
            Category::Commercial => &COMMERCIAL,
            Category::Industrial => &INDUSTRIAL,
            _ => &DOMESTIC,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for a label that names no category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown customer type: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_label(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
