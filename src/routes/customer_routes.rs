use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::customer_controller::CustomerController;
use crate::models::customer::Customer;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{AppPath, ValidatedJson};

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/:national_id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let controller = CustomerController::new(state.customers.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_customer(
    State(state): State<AppState>,
    AppPath(national_id): AppPath<String>,
) -> Result<Json<Customer>, AppError> {
    let controller = CustomerController::new(state.customers.clone());
    let response = controller.get_by_id(&national_id).await?;
    Ok(Json(response))
}

async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(customer): ValidatedJson<Customer>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    let controller = CustomerController::new(state.customers.clone());
    let response = controller.create(customer).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_customer(
    State(state): State<AppState>,
    AppPath(national_id): AppPath<String>,
    ValidatedJson(customer): ValidatedJson<Customer>,
) -> Result<StatusCode, AppError> {
    let controller = CustomerController::new(state.customers.clone());
    controller.update(&national_id, customer).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_customer(
    State(state): State<AppState>,
    AppPath(national_id): AppPath<String>,
) -> Result<StatusCode, AppError> {
    let controller = CustomerController::new(state.customers.clone());
    controller.delete(&national_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
