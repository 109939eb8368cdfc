//! Core tariff calculation functions.
//!
//! Pure functions for billing math - no I/O, no shared state.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{slab_width, Category, SLAB_COUNT};

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use electricity_bill::tariff::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Format an amount with two decimals and comma thousands separators.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use electricity_bill::tariff::format_money;
///
/// assert_eq!(format_money(dec!(2670)), "2,670.00");
/// assert_eq!(format_money(dec!(0)), "0.00");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = round_money(amount, 2);
    rounded.rescale(2);

    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, fraction)
}

/// Units billed within one slab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlabCharge {
    /// 0-based slab index
    pub slab: usize,
    pub units: u64,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Result of a bill calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillBreakdown {
    pub category: Category,
    pub units: u64,
    pub energy_charge: Decimal,
    pub fixed_charge: Decimal,
    pub total: Decimal,
    pub slabs: Vec<SlabCharge>,
}

/// Split consumption across the slabs, pricing each part at its slab rate.
///
/// Only slabs that bill at least one unit are returned. The final slab is
/// unbounded and absorbs any remainder.
pub fn slab_lines(units: u64, category: Category) -> Vec<SlabCharge> {
    let rates = &category.rate_table().rates;
    let mut remaining = units;
    let mut lines = Vec::with_capacity(SLAB_COUNT);

    for (slab, &rate) in rates.iter().enumerate() {
        if remaining == 0 {
            break;
        }

        let consumed = match slab_width(slab) {
            Some(width) => remaining.min(width),
            None => remaining,
        };

        lines.push(SlabCharge {
            slab,
            units: consumed,
            rate,
            amount: Decimal::from(consumed) * rate,
        });
        remaining -= consumed;
    }

    lines
}

/// Energy charge: sum of the per-slab consumption costs.
pub fn compute_energy_charge(units: u64, category: Category) -> Decimal {
    slab_lines(units, category)
        .iter()
        .map(|line| line.amount)
        .sum()
}

/// Flat service charge for a category.
///
/// Categories without their own tariff pay the Domestic charge.
pub fn get_fixed_charge(category: Category) -> Decimal {
    category.rate_table().fixed_charge
}

/// Calculate the full bill: energy charge plus fixed charge.
///
/// No rounding is applied; amounts are rounded only when rendered.
pub fn compute_bill(units: u64, category: Category) -> BillBreakdown {
    let slabs = slab_lines(units, category);
    let energy_charge: Decimal = slabs.iter().map(|line| line.amount).sum();
    let fixed_charge = get_fixed_charge(category);

    BillBreakdown {
        category,
        units,
        energy_charge,
        fixed_charge,
        total: energy_charge + fixed_charge,
        slabs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(2.125), 2), dec!(2.12));
        assert_eq!(round_money(dec!(2.135), 2), dec!(2.14));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
    }

    // ==================== format_money tests ====================

    #[test]
    fn test_format_money_two_decimals() {
        assert_eq!(format_money(dec!(0)), "0.00");
        assert_eq!(format_money(dec!(150)), "150.00");
        assert_eq!(format_money(dec!(8.5)), "8.50");
    }

    #[test]
    fn test_format_money_thousands_separators() {
        assert_eq!(format_money(dec!(2670)), "2,670.00");
        assert_eq!(format_money(dec!(999)), "999.00");
        assert_eq!(format_money(dec!(100000)), "100,000.00");
        assert_eq!(format_money(dec!(1234567.5)), "1,234,567.50");
    }

    #[test]
    fn test_format_money_rounds_half_even() {
        assert_eq!(format_money(dec!(0.125)), "0.12");
        assert_eq!(format_money(dec!(0.135)), "0.14");
        assert_eq!(format_money(dec!(999.999)), "1,000.00");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(dec!(-1234.5)), "-1,234.50");
        assert_eq!(format_money(dec!(-0.001)), "0.00");
    }

    // ==================== energy charge tests ====================

    #[test]
    fn test_first_slab_is_linear() {
        for units in 0..=30u64 {
            assert_eq!(
                compute_energy_charge(units, Category::Domestic),
                Decimal::from(units) * dec!(8)
            );
        }
    }

    #[test]
    fn test_second_slab_adds_to_full_first_slab() {
        for units in 31..=60u64 {
            let expected = dec!(30) * dec!(8) + Decimal::from(units - 30) * dec!(10);
            assert_eq!(compute_energy_charge(units, Category::Domestic), expected);
        }
    }

    #[test]
    fn test_slab_boundary_exactness() {
        let at_thirty = slab_lines(30, Category::Domestic);
        assert_eq!(at_thirty.len(), 1);
        assert_eq!(at_thirty[0].units, 30);

        let at_thirty_one = slab_lines(31, Category::Domestic);
        assert_eq!(at_thirty_one.len(), 2);
        assert_eq!(at_thirty_one[1].slab, 1);
        assert_eq!(at_thirty_one[1].units, 1);
        assert_eq!(at_thirty_one[1].amount, dec!(10));
    }

    #[test]
    fn test_every_slab_edge() {
        // (units, slab lines, Domestic energy charge)
        let cases = [
            (60, 2, dec!(540)),
            (61, 3, dec!(556)),
            (90, 3, dec!(1020)),
            (91, 4, dec!(1070)),
            (120, 4, dec!(2520)),
            (121, 5, dec!(2595)),
        ];

        for (units, slabs, energy) in cases {
            let lines = slab_lines(units, Category::Domestic);
            assert_eq!(lines.len(), slabs, "units {}", units);
            assert_eq!(
                compute_energy_charge(units, Category::Domestic),
                energy,
                "units {}",
                units
            );
            let billed: u64 = lines.iter().map(|l| l.units).sum();
            assert_eq!(billed, units);
        }

        let spill = slab_lines(121, Category::Domestic);
        assert_eq!(spill[3].units, 30);
        assert_eq!(spill[4].units, 1);
        assert_eq!(spill[4].rate, dec!(75));
    }

    #[test]
    fn test_domestic_120_units() {
        let bill = compute_bill(120, Category::Domestic);
        assert_eq!(bill.energy_charge, dec!(2520));
        assert_eq!(bill.fixed_charge, dec!(150));
        assert_eq!(bill.total, dec!(2670));
        assert_eq!(bill.slabs.len(), 4);
    }

    #[test]
    fn test_commercial_150_units() {
        let bill = compute_bill(150, Category::Commercial);
        let amounts: Vec<Decimal> = bill.slabs.iter().map(|l| l.amount).collect();
        assert_eq!(
            amounts,
            vec![dec!(360), dec!(450), dec!(540), dec!(1650), dec!(2400)]
        );
        assert_eq!(bill.energy_charge, dec!(5400));
        assert_eq!(bill.total, dec!(5800));
    }

    #[test]
    fn test_final_slab_absorbs_remainder() {
        let bill = compute_bill(1_000, Category::Industrial);
        let last = bill.slabs.last().unwrap();
        assert_eq!(last.slab, 4);
        assert_eq!(last.units, 880);
        // 30*15 + 30*20 + 30*25 + 30*60 + 880*90
        assert_eq!(bill.energy_charge, dec!(450) + dec!(600) + dec!(750) + dec!(1800) + dec!(79200));
    }

    #[test]
    fn test_very_large_consumption() {
        let bill = compute_bill(u64::MAX, Category::Domestic);
        assert_eq!(bill.slabs[4].units, u64::MAX - 120);
        assert!(bill.total > Decimal::from(u64::MAX));
    }

    #[test]
    fn test_zero_units_only_fixed_charge() {
        for category in Category::ALL {
            let bill = compute_bill(0, category);
            assert_eq!(bill.energy_charge, Decimal::ZERO);
            assert!(bill.slabs.is_empty());
            assert_eq!(bill.total, get_fixed_charge(category));
        }
    }

    #[test]
    fn test_fixed_charges() {
        assert_eq!(get_fixed_charge(Category::Domestic), dec!(150));
        assert_eq!(get_fixed_charge(Category::Commercial), dec!(400));
        assert_eq!(get_fixed_charge(Category::Industrial), dec!(600));
    }

    #[test]
    fn test_government_and_religious_places_billed_as_domestic() {
        for category in [Category::Government, Category::ReligiousPlaces] {
            let bill = compute_bill(120, category);
            assert_eq!(bill.category, category);
            assert_eq!(bill.energy_charge, dec!(2520));
            assert_eq!(bill.fixed_charge, dec!(150));
            assert_eq!(bill.total, dec!(2670));
        }
    }

    #[test]
    fn test_compute_bill_is_pure() {
        let first = compute_bill(97, Category::Commercial);
        let second = compute_bill(97, Category::Commercial);
        assert_eq!(first, second);
    }
}
