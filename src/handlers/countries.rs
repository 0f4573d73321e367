use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::config::AppState;
use crate::services::aggregation::{build_country_info, build_population_response};
use crate::services::upstream::{fetch_cities, fetch_country, fetch_population};
use crate::utils::error::ApiError;
use crate::utils::params::{country_code, LimitParams};

pub async fn country_info(
    State(state): State<AppState>,
    code: Option<Path<String>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ApiError> {
    // Validate everything before touching an upstream → 400 if invalid
    let code = country_code(code.map(|Path(c)| c))?;
    let limit = LimitParams::from_pairs(pairs).city_limit()?;

    let country = fetch_country(&state, &code).await?;
    let cities = fetch_cities(&state, &country.name.common).await?;

    Ok(Json(build_country_info(country, cities, limit)))
}

pub async fn population(
    State(state): State<AppState>,
    code: Option<Path<String>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ApiError> {
    let code = country_code(code.map(|Path(c)| c))?;
    let range = LimitParams::from_pairs(pairs).year_range()?;

    let country = fetch_country(&state, &code).await?;
    let series = fetch_population(&state, &country.name.common).await?;

    Ok(Json(build_population_response(series, range)))
}
