//! Plain-text bill layout, shared by the web form and the printer.

use crate::tariff::{format_money, BillBreakdown};

use super::form::ValidatedBill;

const RULE: &str = "=========================";

/// Render the customer's bill as printable text.
pub fn render_receipt(bill: &ValidatedBill, breakdown: &BillBreakdown) -> String {
    format!(
        "Sri Lanka Electricity Bill
{rule}
Customer Name: {name}
Account No: {account}
Customer Type: {category}
Units Consumed: {units}
{rule}
Energy Charge: Rs. {energy}
Fixed Charge: Rs. {fixed}
{rule}
Total Amount: Rs. {total}
{rule}
",
        rule = RULE,
        name = bill.name,
        account = bill.account,
        category = bill.category,
        units = bill.units,
        energy = format_money(breakdown.energy_charge),
        fixed = format_money(breakdown.fixed_charge),
        total = format_money(breakdown.total),
    )
}
