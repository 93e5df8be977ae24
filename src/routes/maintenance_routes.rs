use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::maintenance_dto::{
    MaintenanceFinishedData, MaintenanceStartedData, StartMaintenanceRequest,
};
use crate::models::maintenance::Maintenance;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{AppPath, ValidatedJson};

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_maintenance).post(start_maintenance))
        .route("/:id", get(get_maintenance))
        .route("/:id/finish", put(finish_maintenance))
}

async fn list_maintenance(
    State(state): State<AppState>,
) -> Result<Json<Vec<Maintenance>>, AppError> {
    let controller = MaintenanceController::new(state.maintenance.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_maintenance(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Maintenance>, AppError> {
    let controller = MaintenanceController::new(state.maintenance.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn start_maintenance(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<StartMaintenanceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MaintenanceStartedData>>), AppError> {
    let controller = MaintenanceController::new(state.maintenance.clone());
    let started = controller.start(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            started,
            "Maintenance started. The vehicle is now 'Unavailable'.",
        )),
    ))
}

async fn finish_maintenance(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<MaintenanceFinishedData>>, AppError> {
    let controller = MaintenanceController::new(state.maintenance.clone());
    let finished = controller.finish(id).await?;

    let message = if finished.vehicle_released {
        "Maintenance finished and vehicle released."
    } else {
        "Maintenance finished. The vehicle remains in an open rental."
    };

    Ok(Json(ApiResponse::success_with_message(finished, message)))
}
