//! Bill form route handlers

use askama::Template;
use axum::{
    extract::State,
    response::Html,
    routing::post,
    Form, Router,
};
use serde::Deserialize;

use crate::bill::{render_receipt, BillForm};
use crate::error::{AppError, Result};
use crate::tariff::{compute_bill, Category};
use crate::AppState;

const PRINT_ERROR: &str = "Error printing document";
const PRINT_SENT: &str = "Bill sent to printer";

/// Fields posted by every button on the bill page
#[derive(Debug, Default, Deserialize)]
pub struct BillPageForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub units: String,
    /// Bill text currently on display
    #[serde(default)]
    pub result: String,
}

impl BillPageForm {
    fn bill_form(&self) -> BillForm {
        BillForm {
            name: self.name.clone(),
            account: self.account.clone(),
            category: self.category.clone(),
            units: self.units.clone(),
        }
    }
}

/// Option in the customer type selector
struct CategoryOption {
    label: &'static str,
    selected: bool,
}

/// Bill page template
#[derive(Template)]
#[template(path = "bill/form.html")]
struct BillPageTemplate {
    name: String,
    account: String,
    units: String,
    categories: Vec<CategoryOption>,
    result: String,
    has_result: bool,
    error: String,
    has_error: bool,
    notice: String,
    has_notice: bool,
}

impl BillPageTemplate {
    fn new(form: &BillPageForm, selected: Category) -> Self {
        Self {
            name: form.name.clone(),
            account: form.account.clone(),
            units: form.units.clone(),
            categories: Category::ALL
                .into_iter()
                .map(|c| CategoryOption {
                    label: c.label(),
                    selected: c == selected,
                })
                .collect(),
            has_result: !form.result.is_empty(),
            result: form.result.clone(),
            error: String::new(),
            has_error: false,
            notice: String::new(),
            has_notice: false,
        }
    }

    fn with_result(mut self, result: String) -> Self {
        self.has_result = !result.is_empty();
        self.result = result;
        self
    }

    fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = message.into();
        self.has_error = true;
        self
    }

    fn with_notice(mut self, message: impl Into<String>) -> Self {
        self.notice = message.into();
        self.has_notice = true;
        self
    }

    fn into_html(self) -> Result<Html<String>> {
        Ok(Html(self.render()?))
    }
}

/// Routes mounted under `/bill`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/reset", post(reset))
        .route("/print", post(print))
}

/// Empty bill form
pub async fn index() -> Result<Html<String>> {
    BillPageTemplate::new(&BillPageForm::default(), Category::default()).into_html()
}

/// Validate the form and show the calculated bill
pub async fn calculate(Form(form): Form<BillPageForm>) -> Result<Html<String>> {
    let input = form.bill_form();
    let page = BillPageTemplate::new(&form, input.category());

    let bill = match input.validate() {
        Ok(bill) => bill,
        Err(e) => {
            tracing::info!("Bill form rejected: {}", e);
            return page.with_error(e.to_string()).into_html();
        }
    };

    let breakdown = compute_bill(bill.units, bill.category);
    tracing::debug!(
        "Calculated bill for account {}: {} units, {} -> total {}",
        bill.account,
        bill.units,
        bill.category,
        breakdown.total
    );

    page.with_result(render_receipt(&bill, &breakdown)).into_html()
}

/// Clear all inputs and the displayed bill
pub async fn reset() -> Result<Html<String>> {
    index().await
}

/// Send the displayed bill to the printer
pub async fn print(
    State(state): State<AppState>,
    Form(form): Form<BillPageForm>,
) -> Result<Html<String>> {
    let page = BillPageTemplate::new(&form, form.bill_form().category());

    let printer = state.printer.clone();
    let document = form.result.clone();
    let outcome = tokio::task::spawn_blocking(move || printer.print(&document))
        .await
        .map_err(|e| AppError::Internal(format!("Print task failed: {}", e)))?;

    match outcome {
        Ok(()) => page.with_notice(PRINT_SENT).into_html(),
        Err(e) => {
            tracing::warn!("Printing failed: {}", e);
            page.with_error(PRINT_ERROR).into_html()
        }
    }
}
