//! Handlers for the `/cities` resource.

use axum::extract::State;
use axum::Json;
use pglife_db::models::city::City;
use pglife_db::repositories::CityRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CitiesBody {
    pub cities: Vec<City>,
}

/// GET /api/cities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CitiesBody>>> {
    let cities = CityRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::new(CitiesBody { cities })))
}
