use crate::models::country::{CountryInfo, PopulationCount, PopulationResponse};
use crate::types::external::RcCountry;

/// Sorts the cities and caps them at `limit` when `0 < limit < len`.
pub fn build_country_info(country: RcCountry, mut cities: Vec<String>, limit: i64) -> CountryInfo {
    cities.sort();
    if let Ok(cap) = usize::try_from(limit) {
        if cap > 0 && cap < cities.len() {
            cities.truncate(cap);
        }
    }

    CountryInfo {
        name: country.name.common,
        continents: country.continents,
        population: country.population,
        languages: country.languages,
        borders: country.borders,
        flag: country.flags.png,
        capital: country.capital.into_iter().next().unwrap_or_default(),
        cities,
    }
}

/// Integer-truncated average, 0 for an empty series.
pub fn mean(counts: &[PopulationCount]) -> i64 {
    if counts.is_empty() {
        return 0;
    }
    let sum: i64 = counts.iter().map(|c| c.value).sum();
    sum / counts.len() as i64
}

/// Keeps entries inside the inclusive range (all of them when `range` is None).
pub fn build_population_response(
    series: Vec<PopulationCount>,
    range: Option<(i64, i64)>,
) -> PopulationResponse {
    let population_counts: Vec<PopulationCount> = match range {
        Some((start, end)) => series
            .into_iter()
            .filter(|c| (start..=end).contains(&c.year))
            .collect(),
        None => series,
    };

    PopulationResponse {
        mean: mean(&population_counts),
        population_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::external::{RcFlags, RcName};
    use std::collections::BTreeMap;

    fn country(capital: Vec<&str>) -> RcCountry {
        RcCountry {
            name: RcName { common: "Norway".into() },
            continents: vec!["Europe".into()],
            population: 5_379_475,
            languages: BTreeMap::from([("nno".into(), "Norwegian Nynorsk".into())]),
            borders: vec!["FIN".into(), "SWE".into(), "RUS".into()],
            flags: RcFlags { png: "https://flagcdn.com/w320/no.png".into() },
            capital: capital.into_iter().map(String::from).collect(),
        }
    }

    fn cities() -> Vec<String> {
        ["Oslo", "Bergen", "Tromso", "Alta", "Drammen"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn pc(year: i64, value: i64) -> PopulationCount {
        PopulationCount { year, value }
    }

    #[test]
    fn positive_limit_below_len_yields_sorted_prefix() {
        let mut all = cities();
        all.sort();
        for l in 1..5 {
            let info = build_country_info(country(vec!["Oslo"]), cities(), l);
            assert_eq!(info.cities.len(), l as usize);
            assert_eq!(info.cities[..], all[..l as usize]);
            assert!(info.cities.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn non_positive_or_large_limit_keeps_everything() {
        for l in [-7, 0, 5, 6, 100] {
            let info = build_country_info(country(vec!["Oslo"]), cities(), l);
            assert_eq!(info.cities, vec!["Alta", "Bergen", "Drammen", "Oslo", "Tromso"]);
        }
    }

    #[test]
    fn capital_is_first_entry_or_empty() {
        let info = build_country_info(country(vec!["Oslo", "Longyearbyen"]), vec![], 0);
        assert_eq!(info.capital, "Oslo");
        let info = build_country_info(country(vec![]), vec![], 0);
        assert_eq!(info.capital, "");
        assert_eq!(info.name, "Norway");
        assert_eq!(info.flag, "https://flagcdn.com/w320/no.png");
        assert_eq!(info.borders, vec!["FIN", "SWE", "RUS"]);
    }

    #[test]
    fn mean_of_empty_series_is_zero() {
        assert_eq!(mean(&[]), 0);
        assert_eq!(mean(&[pc(2000, 10), pc(2001, 20)]), 15);
        assert_eq!(mean(&[pc(2000, 10), pc(2001, 11)]), 10);
    }

    #[test]
    fn range_filter_is_inclusive() {
        let series = vec![pc(1999, 5), pc(2000, 10), pc(2001, 20), pc(2002, 30)];
        let resp = build_population_response(series, Some((2000, 2001)));
        assert_eq!(resp.population_counts, vec![pc(2000, 10), pc(2001, 20)]);
        assert_eq!(resp.mean, 15);
    }

    #[test]
    fn no_range_keeps_order_and_empty_match_means_zero() {
        let series = vec![pc(2002, 30), pc(1999, 5)];
        let resp = build_population_response(series.clone(), None);
        assert_eq!(resp.population_counts, series);
        assert_eq!(resp.mean, 17);

        let resp = build_population_response(series, Some((1800, 1900)));
        assert!(resp.population_counts.is_empty());
        assert_eq!(resp.mean, 0);
    }
}
