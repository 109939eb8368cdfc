//! JSON API for tariff calculations.

use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::AppState;

use super::calculators::compute_bill;
use super::models::Category;
use super::requests::CalculateBillRequest;
use super::responses::{BillResponse, CategoryRatesResponse, RateScheduleResponse};

/// Routes mounted under `/api/tariff`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bill", post(calculate_bill))
        .route("/rates", get(rate_schedule))
}

/// Calculate a bill from units and category
async fn calculate_bill(
    payload: std::result::Result<Json<CalculateBillRequest>, JsonRejection>,
) -> Result<Json<BillResponse>> {
    let Json(request) = payload?;

    let units = match u64::try_from(request.units) {
        Ok(units) => units,
        Err(_) if request.units < 0 => {
            tracing::info!("Rejected bill request with negative units: {}", request.units);
            return Err(AppError::NegativeUnits);
        }
        Err(_) => return Err(AppError::UnitsOutOfRange(request.units)),
    };

    let category = request.category();
    let bill = compute_bill(units, category);
    tracing::debug!("API bill: {} units, {} -> total {}", units, category, bill.total);

    Ok(Json(BillResponse::from(bill)))
}

/// Rate schedule for every category
async fn rate_schedule() -> Json<RateScheduleResponse> {
    Json(RateScheduleResponse {
        categories: Category::ALL
            .into_iter()
            .map(CategoryRatesResponse::for_category)
            .collect(),
    })
}
