use axum::{extract::State, Json};

use crate::config::AppState;
use crate::models::diagnostics::Diagnostics;
use crate::services::upstream::probe;

pub const VERSION: &str = "v1";

/// Never fails: an unreachable upstream shows up as status 0.
pub async fn status(State(state): State<AppState>) -> Json<Diagnostics> {
    let countries_now = probe(&state, &format!("{}/api/v0.1/countries", state.countries_now_url)).await;
    let rest_countries = probe(&state, &format!("{}/v3.1/all", state.rest_countries_url)).await;

    Json(Diagnostics {
        countriesnowapi: countries_now,
        restcountriesapi: rest_countries,
        version: VERSION,
        uptime: state.uptime().as_secs(),
    })
}
