use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Debug)]
pub struct CountryInfo {
    pub name: String,
    pub continents: Vec<String>,
    pub population: i64,
    pub languages: BTreeMap<String, String>,
    pub borders: Vec<String>,
    pub flag: String,
    pub capital: String,
    pub cities: Vec<String>,
}

/// A single `(year, value)` point; same shape upstream and in our responses.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopulationCount {
    pub year: i64,
    pub value: i64,
}

#[derive(Serialize, Debug)]
pub struct PopulationResponse {
    pub mean: i64,
    #[serde(rename = "populationCounts")]
    pub population_counts: Vec<PopulationCount>,
}
