use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::models::country::PopulationCount;

/// Missing and explicit `null` both decode to the type's default.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

#[derive(Deserialize, Default)]
pub struct RcName {
    #[serde(default, deserialize_with = "null_as_default")]
    pub common: String,
}

#[derive(Deserialize, Default)]
pub struct RcFlags {
    #[serde(default, deserialize_with = "null_as_default")]
    pub png: String,
}

/// One element of the `/v3.1/alpha/{code}` array.
#[derive(Deserialize)]
pub struct RcCountry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: RcName,
    #[serde(default, deserialize_with = "null_as_default")]
    pub continents: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub borders: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: RcFlags,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capital: Vec<String>,
}

/// `{error, msg, data}` wrapper used by every countriesnow endpoint.
/// `data` stays untyped until the error flag has been looked at.
#[derive(Deserialize)]
pub struct CnEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub msg: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Deserialize)]
pub struct CnPopulationData {
    #[serde(rename = "populationCounts", default, deserialize_with = "null_as_default")]
    pub population_counts: Vec<PopulationCount>,
}

#[derive(Serialize)]
pub struct CnCountryQuery<'a> {
    pub country: &'a str,
}
