use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::AppState;
use crate::handlers::countries::{country_info, population};
use crate::handlers::diagnostics::status;

pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/countryinfo/v1/info/", get(country_info))
        .route("/countryinfo/v1/info/:code", get(country_info))
        .route("/countryinfo/v1/info/:code/", get(country_info))
        .route("/countryinfo/v1/population/", get(population))
        .route("/countryinfo/v1/population/:code", get(population))
        .route("/countryinfo/v1/population/:code/", get(population))
        .route("/countryinfo/v1/status", get(status))
        .route("/countryinfo/v1/status/", get(status))
        .fallback_service(static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
