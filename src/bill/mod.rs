//! Customer bill input and receipt rendering

pub mod form;
pub mod receipt;

pub use form::{BillForm, FormError, ValidatedBill};
pub use receipt::render_receipt;
