use tracing::{debug, warn};

use crate::config::AppState;
use crate::models::country::PopulationCount;
use crate::types::external::{CnCountryQuery, CnEnvelope, CnPopulationData, RcCountry};
use crate::utils::error::UpstreamError;

/// Looks the code up on restcountries and keeps the first match.
pub async fn fetch_country(state: &AppState, code: &str) -> Result<RcCountry, UpstreamError> {
    let url = format!("{}/v3.1/alpha/{}", state.rest_countries_url, code);

    let countries: Vec<RcCountry> = state
        .http
        .get(&url)
        .send()
        .await
        .map_err(|e| {
            warn!(upstream = "restcountries", error = %e, "request failed");
            UpstreamError::Unavailable(format!("error calling REST Countries API: {}", e))
        })?
        .json()
        .await
        .map_err(|e| {
            warn!(upstream = "restcountries", error = %e, "undecodable body");
            UpstreamError::Parse(format!("error parsing REST Countries API response: {}", e))
        })?;

    countries.into_iter().next().ok_or_else(|| {
        UpstreamError::Parse(format!(
            "error parsing REST Countries API response: no country for code {}",
            code
        ))
    })
}

async fn post_countries_now(
    state: &AppState,
    endpoint: &str,
    country: &str,
) -> Result<CnEnvelope, UpstreamError> {
    let url = format!("{}/api/v0.1/countries/{}", state.countries_now_url, endpoint);

    state
        .http
        .post(&url)
        .json(&CnCountryQuery { country })
        .send()
        .await
        .map_err(|e| {
            warn!(upstream = "countriesnow", endpoint, error = %e, "request failed");
            UpstreamError::Unavailable(format!("error calling CountriesNow {} API: {}", endpoint, e))
        })?
        .json()
        .await
        .map_err(|e| {
            warn!(upstream = "countriesnow", endpoint, error = %e, "undecodable body");
            UpstreamError::Parse(format!("error parsing {} API response: {}", endpoint, e))
        })
}

/// City names as upstream returns them. No data is an empty list, not an error.
pub async fn fetch_cities(state: &AppState, country: &str) -> Result<Vec<String>, UpstreamError> {
    let env = post_countries_now(state, "cities", country).await?;
    if env.data.is_null() {
        debug!(country, msg = %env.msg, "no cities reported");
        return Ok(Vec::new());
    }
    serde_json::from_value(env.data)
        .map_err(|e| UpstreamError::Parse(format!("error parsing cities API response: {}", e)))
}

/// Raw `(year, value)` series. An upstream `error: true` is surfaced as `Rejected`.
pub async fn fetch_population(
    state: &AppState,
    country: &str,
) -> Result<Vec<PopulationCount>, UpstreamError> {
    let env = post_countries_now(state, "population", country).await?;
    if env.error {
        warn!(upstream = "countriesnow", country, msg = %env.msg, "population lookup rejected");
        return Err(UpstreamError::Rejected(format!(
            "population API reported an error: {}",
            env.msg
        )));
    }
    if env.data.is_null() {
        debug!(country, msg = %env.msg, "no population series reported");
        return Ok(Vec::new());
    }
    let data: CnPopulationData = serde_json::from_value(env.data)
        .map_err(|e| UpstreamError::Parse(format!("error parsing population API response: {}", e)))?;
    Ok(data.population_counts)
}

/// HTTP status of a plain GET, or 0 when the request never completes.
pub async fn probe(state: &AppState, url: &str) -> u16 {
    match state.http.get(url).send().await {
        Ok(resp) => resp.status().as_u16(),
        Err(e) => {
            debug!(url, error = %e, "probe failed");
            0
        }
    }
}
