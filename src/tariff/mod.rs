//! Tariff engine module.
//!
//! Slab-based tiered billing: consumption is split across fixed-width slabs,
//! each priced at its category's per-unit rate, and a flat fixed charge is
//! added on top.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{
    compute_bill, compute_energy_charge, format_money, get_fixed_charge, round_money,
    slab_lines, BillBreakdown, SlabCharge,
};
pub use models::{Category, RateTable, SlabLimit, SLAB_BOUNDARIES};
pub use routes::router;
