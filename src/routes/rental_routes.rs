use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use crate::controllers::rental_controller::RentalController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::rental_dto::{RentalClosedData, RentalCreatedResponse, RentalRequest};
use crate::models::rental::Rental;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{AppPath, ValidatedJson};

pub fn create_rental_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rentals).post(create_rental))
        .route("/:id", get(get_rental))
        .route("/:id/close", put(close_rental))
}

async fn list_rentals(
    State(state): State<AppState>,
) -> Result<Json<Vec<Rental>>, AppError> {
    let controller = RentalController::new(state.rentals.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_rental(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Rental>, AppError> {
    let controller = RentalController::new(state.rentals.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_rental(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RentalRequest>,
) -> Result<(StatusCode, Json<RentalCreatedResponse>), AppError> {
    let controller = RentalController::new(state.rentals.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn close_rental(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<RentalClosedData>>, AppError> {
    let controller = RentalController::new(state.rentals.clone());
    let closed = controller.close(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        closed,
        "Return registered successfully. Final price calculated and vehicle released.",
    )))
}
