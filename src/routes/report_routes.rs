use axum::{extract::State, routing::get, Json, Router};
use crate::controllers::report_controller::ReportController;
use crate::models::report::ActiveRentalReport;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new().route("/active-rentals", get(active_rentals))
}

async fn active_rentals(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActiveRentalReport>>, AppError> {
    let controller = ReportController::new(state.reports.clone());
    let response = controller.active_rentals().await?;
    Ok(Json(response))
}
